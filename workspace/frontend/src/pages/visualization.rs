use yew::prelude::*;

use crate::components::visualization::chart_frame::ChartFrame;

/// Document loaded inside the host's iframe.
#[function_component(VisualizationPage)]
pub fn visualization_page() -> Html {
    html! {
        <div class="bg-white min-h-screen">
            <ChartFrame />
        </div>
    }
}
