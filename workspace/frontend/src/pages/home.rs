use common::{FEATURED_VIDEO, INFO_CARDS, RESOURCE_LINKS};
use yew::prelude::*;

use crate::components::layout::layout::Layout;
use crate::components::resources::info_card::InfoCardView;
use crate::components::resources::resource_card::ResourceCard;
use crate::components::resources::video::VideoCard;
use crate::components::visualization::iframe::IframeVisualization;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout title="Phoenix Climate Data">
            <section class="bg-gradient-to-r from-orange-500 to-red-600 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-4xl font-bold mb-4">{"Phoenix Is Getting Hotter"}</h2>
                    <p class="text-lg max-w-2xl mx-auto">
                        {"Explore how temperatures across the Phoenix metropolitan area have changed "}
                        {"between 1990 and 2024, and find resources for understanding the local climate."}
                    </p>
                </div>
            </section>

            <section id="visualization" class="container mx-auto px-4 py-12">
                <div class="bg-white rounded-lg shadow-md p-6 mb-8">
                    <h2 class="text-2xl font-bold mb-4">{"Temperature Comparison: 1990 vs 2024"}</h2>
                    <IframeVisualization />
                </div>
                <div class="grid gap-6 md:grid-cols-3">
                    { for INFO_CARDS.iter().map(|card| html! { <InfoCardView card={*card} /> }) }
                </div>
            </section>

            <section id="resources" class="container mx-auto px-4 py-12">
                <h2 class="text-2xl font-bold mb-6">{"Climate Resources"}</h2>
                <div class="grid gap-6 lg:grid-cols-2">
                    <VideoCard video={FEATURED_VIDEO} />
                    <div class="grid gap-4">
                        { for RESOURCE_LINKS.iter().map(|link| html! { <ResourceCard link={*link} /> }) }
                    </div>
                </div>
            </section>
        </Layout>
    }
}
