use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-800 text-gray-300 py-8 mt-12">
            <div class="container mx-auto px-4 text-center text-sm">
                <p>{"Phoenix Climate Data"}</p>
                <p class="mt-2">{"Temperature records courtesy of NOAA and the National Weather Service."}</p>
            </div>
        </footer>
    }
}
