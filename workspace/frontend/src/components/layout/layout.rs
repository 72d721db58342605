use yew::prelude::*;
use super::footer::Footer;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-gray-50">
            <Navbar title={props.title.clone()} />
            <main class="flex-1">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
