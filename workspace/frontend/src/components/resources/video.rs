use common::VideoEmbed;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub video: VideoEmbed,
}

/// Inline style of the thumbnail layered over the player. It fades out once
/// the player reports that it loaded.
pub fn thumbnail_style(thumbnail_url: &str, player_loaded: bool) -> String {
    format!(
        "background-image: url('{}'); background-size: cover; background-position: center; opacity: {}; transition: opacity 0.5s ease; z-index: 5;",
        thumbnail_url,
        if player_loaded { 0 } else { 1 }
    )
}

#[function_component(VideoCard)]
pub fn video_card(props: &Props) -> Html {
    let player_loaded = use_state(|| false);

    let on_load = {
        let player_loaded = player_loaded.clone();
        Callback::from(move |_: Event| {
            log::debug!("Video player loaded");
            player_loaded.set(true);
        })
    };

    let video = props.video;

    html! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden">
            <div class="relative w-full" style="padding-top: 56.25%;">
                <div
                    class="absolute inset-0 pointer-events-none"
                    style={thumbnail_style(&video.thumbnail_url(), *player_loaded)}
                ></div>
                <iframe
                    class="absolute inset-0 w-full h-full border-0"
                    src={video.embed_url()}
                    title={video.title}
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                    onload={on_load}
                ></iframe>
            </div>
            <div class="p-4">
                <h3 class="text-lg font-semibold mb-2">{video.title}</h3>
                <p class="text-gray-600 text-sm">{video.description}</p>
            </div>
        </div>
    }
}
