use common::{ChartType, PLOT_CONTAINER_ID};
use compute::{ChartLoader, LoaderOptions, LoaderView};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::HttpDatasetSource;
use crate::plotly::PlotlySurface;
use crate::settings::get_settings;

type FrameLoader = ChartLoader<HttpDatasetSource, PlotlySurface>;

pub fn display_style(visible: bool) -> &'static str {
    if visible { "display: block;" } else { "display: none;" }
}

/// Chart-type controls and the plot area rendered inside the frame.
#[function_component(ChartFrame)]
pub fn chart_frame() -> Html {
    let loader = use_memo((), |_| {
        let settings = get_settings();
        log::debug!("Chart frame using value source {:?}", settings.value_source);
        FrameLoader::new(
            HttpDatasetSource,
            PlotlySurface,
            LoaderOptions {
                dataset_path: settings.dataset_path,
                value_source: settings.value_source,
                ..LoaderOptions::default()
            },
        )
    });
    let view = use_state(|| loader.view());

    let select = {
        let loader = loader.clone();
        let view = view.clone();
        Callback::from(move |chart_type: ChartType| {
            loader.activate(chart_type);
            loader.begin_load();
            view.set(loader.view());

            let loader = loader.clone();
            let view = view.clone();
            spawn_local(async move {
                let outcome = loader.finish_load(chart_type).await;
                log::debug!("Load finished: {:?}", outcome);
                view.set(loader.view());
            });
        })
    };

    {
        let select = select.clone();
        use_effect_with((), move |_| {
            log::info!("DOM loaded - ready for visualization");
            select.emit(ChartType::default());
            || ()
        });
    }

    let current: &LoaderView = &view;

    html! {
        <div class="p-4">
            <div class="chart-controls flex gap-2 mb-4">
                { for ChartType::ALL.iter().map(|&chart_type| {
                    let select = select.clone();
                    html! {
                        <button
                            id={chart_type.button_id()}
                            class={classes!(
                                "px-4", "py-2", "rounded", "border",
                                current.is_active(chart_type).then_some("active")
                            )}
                            onclick={Callback::from(move |_| select.emit(chart_type))}
                        >
                            {chart_type.label()}
                        </button>
                    }
                }) }
            </div>
            <div id="loading-message" class="text-gray-600" style={display_style(current.loading_visible)}>
                {"Loading temperature data..."}
            </div>
            <div id="error-message" class="text-red-500" style={display_style(current.error_visible)}>
                {&current.error_message}
            </div>
            <div id={PLOT_CONTAINER_ID} class="w-full" style="height: 500px;"></div>
        </div>
    }
}
