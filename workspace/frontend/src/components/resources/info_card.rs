use common::InfoCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub card: InfoCard,
}

#[function_component(InfoCardView)]
pub fn info_card_view(props: &Props) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-md p-4">
            <h3 class="text-lg font-semibold mb-2">{props.card.title}</h3>
            <ul class="list-disc pl-5 space-y-1 text-sm text-gray-700">
                { for props.card.items.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        </div>
    }
}
