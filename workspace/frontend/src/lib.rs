use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod widgets;
pub mod api_client;
pub mod plotly;
pub mod settings;

use pages::home::Home;
use pages::visualization::VisualizationPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/visualization/index.html")]
    Visualization,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Visualization => {
            log::trace!("Rendering chart frame");
            html! { <VisualizationPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1 class="text-center text-2xl p-8">{"404 Not Found"}</h1> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let ignored = settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));
    for message in &ignored {
        log::warn!("{}", message);
    }

    log::info!("=== Phoenix Climate Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Dataset path: {}", settings.dataset_path);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
