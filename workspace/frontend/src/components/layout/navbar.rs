use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <header class="bg-white shadow-sm sticky top-0 z-40">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
                <nav class="flex gap-6 text-sm font-medium">
                    <a href="#visualization" class="hover:text-blue-600">{"Visualization"}</a>
                    <a href="#resources" class="hover:text-blue-600">{"Resources"}</a>
                </nav>
            </div>
        </header>
    }
}
