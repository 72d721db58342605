//! Visualization host state: frame load/error flags and responsive height.

use common::LoadState;
use tracing::{debug, error, info};

/// Viewports narrower than this get the short frame.
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 768.0;
pub const NARROW_FRAME_HEIGHT: &str = "400px";
pub const WIDE_FRAME_HEIGHT: &str = "600px";

/// Frame height for a viewport `width` in logical pixels.
pub fn frame_height_for_width(width: f64) -> &'static str {
    if width < NARROW_VIEWPORT_MAX_WIDTH {
        NARROW_FRAME_HEIGHT
    } else {
        WIDE_FRAME_HEIGHT
    }
}

/// State of the page-level container around the chart frame.
///
/// A frame failure is terminal: a later load signal does not clear it.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationHost {
    load_state: LoadState,
    frame_height: &'static str,
}

impl Default for VisualizationHost {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualizationHost {
    pub fn new() -> Self {
        Self {
            load_state: LoadState::Loading,
            frame_height: WIDE_FRAME_HEIGHT,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    pub fn has_error(&self) -> bool {
        self.load_state.has_error()
    }

    pub fn frame_height(&self) -> &'static str {
        self.frame_height
    }

    /// The frame fired its load signal.
    pub fn on_frame_load(&mut self) {
        info!("Visualization iframe loaded");
        if self.load_state != LoadState::Error {
            self.load_state = LoadState::Ready;
        }
    }

    /// The frame fired its error signal.
    pub fn on_frame_error(&mut self) {
        error!("Error loading visualization iframe");
        self.load_state = LoadState::Error;
    }

    /// The viewport was resized to `width`. Returns whether the height changed.
    pub fn on_resize(&mut self, width: f64) -> bool {
        let height = frame_height_for_width(width);
        if height == self.frame_height {
            return false;
        }
        debug!(width, height, "Adjusting visualization frame height");
        self.frame_height = height;
        true
    }
}
