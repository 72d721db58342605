use std::rc::Rc;

use common::FRAME_PATH;
use compute::VisualizationHost;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::widgets::error::ErrorDisplay;
use crate::widgets::loading::Loading;

const FRAME_TITLE: &str = "Phoenix Temperature Visualization";
const FRAME_ERROR_MESSAGE: &str = "Error loading visualization. Please try refreshing the page.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostModel(pub VisualizationHost);

pub enum HostAction {
    FrameLoaded,
    FrameFailed,
    Resized(f64),
}

impl Reducible for HostModel {
    type Action = HostAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut host = self.0.clone();
        match action {
            HostAction::FrameLoaded => host.on_frame_load(),
            HostAction::FrameFailed => host.on_frame_error(),
            HostAction::Resized(width) => {
                if !host.on_resize(width) {
                    return self;
                }
            }
        }
        Rc::new(HostModel(host))
    }
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        log::error!("Failed to reload page: {:?}", e);
    }
}

/// Frame hosting the chart loader, with its own loading and error overlays.
#[function_component(IframeVisualization)]
pub fn iframe_visualization() -> Html {
    let host = use_reducer(HostModel::default);

    {
        let dispatcher = host.dispatcher();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let resize = move || {
                    if let Some(width) = viewport_width() {
                        dispatcher.dispatch(HostAction::Resized(width));
                    }
                };
                resize();

                let closure = Closure::<dyn Fn()>::new(resize);
                if let Err(e) = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                {
                    log::error!("Failed to register resize listener: {:?}", e);
                }
                closure
            });

            move || {
                if let (Some(window), Some(closure)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_load = {
        let dispatcher = host.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(HostAction::FrameLoaded))
    };

    let on_error = {
        let dispatcher = host.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(HostAction::FrameFailed))
    };

    let model = &host.0;

    html! {
        <div class="w-full border rounded-lg overflow-hidden bg-white relative">
            if model.is_loading() {
                <div class="absolute inset-0 flex items-center justify-center bg-white z-10">
                    <Loading text="Loading visualization..." />
                </div>
            }
            if model.has_error() {
                <div class="absolute inset-0 flex items-center justify-center bg-white z-10">
                    <ErrorDisplay
                        message={FRAME_ERROR_MESSAGE}
                        retry_label="Refresh"
                        on_retry={Callback::from(|_| reload_page())}
                    />
                </div>
            }
            <iframe
                src={FRAME_PATH}
                title={FRAME_TITLE}
                class="w-full border-0"
                style={format!("height: {};", model.frame_height())}
                onload={on_load}
                onerror={on_error}
                allowfullscreen=true
            ></iframe>
        </div>
    }
}
