use common::{ValueSource, DATASET_PATH};
use log::Level;
use web_sys::window;

const STORAGE_LOG_LEVEL: &str = "phoenix_log_level";
const STORAGE_DATASET_PATH: &str = "phoenix_dataset_path";
const STORAGE_VALUE_SOURCE: &str = "phoenix_value_source";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Path the chart frame fetches its dataset from
    pub dataset_path: String,

    /// Whether the chart frame renders the sample values or the parsed dataset
    pub value_source: ValueSource,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            dataset_path: DATASET_PATH.to_string(),
            value_source: ValueSource::Placeholder,
        }
    }
}

/// Raw values found in `localStorage`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredOverrides {
    pub log_level: Option<String>,
    pub dataset_path: Option<String>,
    pub value_source: Option<String>,
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Apply stored overrides. Returns one message per value that was
    /// ignored, for logging once the logger is up.
    pub fn apply_overrides(&mut self, stored: StoredOverrides) -> Vec<String> {
        let mut ignored = Vec::new();

        if let Some(level) = stored.log_level {
            match parse_level(&level) {
                Some(level) => self.log_level = level,
                None => ignored.push(format!("Ignoring stored log level '{}'", level)),
            }
        }

        if let Some(path) = stored.dataset_path {
            if path.trim().is_empty() {
                ignored.push("Ignoring empty stored dataset path".to_string());
            } else {
                self.dataset_path = path;
            }
        }

        if let Some(source) = stored.value_source {
            match source.parse::<ValueSource>() {
                Ok(source) => self.value_source = source,
                Err(e) => ignored.push(format!("Ignoring stored value source: {}", e)),
            }
        }

        ignored
    }

    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> (Self, Vec<String>) {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return (settings, Vec::new());
        };

        if let Ok(hostname) = window.location().hostname() {
            if hostname == "localhost" || hostname == "127.0.0.1" {
                settings.log_level = Level::Debug;
            }
        }

        let mut stored = StoredOverrides::default();
        if let Ok(Some(storage)) = window.local_storage() {
            stored.log_level = storage.get_item(STORAGE_LOG_LEVEL).ok().flatten();
            stored.dataset_path = storage.get_item(STORAGE_DATASET_PATH).ok().flatten();
            stored.value_source = storage.get_item(STORAGE_VALUE_SOURCE).ok().flatten();
        }

        let ignored = settings.apply_overrides(stored);
        (settings, ignored)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup). Returns messages about
/// ignored stored values.
pub fn init_settings() -> Vec<String> {
    let (settings, ignored) = AppSettings::from_environment();
    SETTINGS.with(|s| {
        *s.borrow_mut() = settings;
    });
    ignored
}
