use common::ResourceLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub link: ResourceLink,
}

#[function_component(ResourceCard)]
pub fn resource_card(props: &Props) -> Html {
    let link = props.link;

    html! {
        <a
            href={link.url}
            target="_blank"
            rel="noopener noreferrer"
            class={format!("block rounded-lg border p-4 {} {}", link.card_class(), link.hover_class())}
        >
            <h3 class="text-lg font-semibold mb-2">{link.title}</h3>
            <p class="text-gray-600 text-sm flex-1">{link.description}</p>
            <span class="mt-3 text-sm font-medium">{"Visit site →"}</span>
        </a>
    }
}
