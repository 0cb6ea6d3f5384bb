use leptos::*;

// Fixed external embeds. We pass display dimensions and passive playback
// hints, read nothing back, and degrade silently if the frame is blocked.
const PLAYLIST_EMBED_URL: &str =
    "https://open.spotify.com/embed/playlist/53nilY55SJ5exHRFhs6CwN?utm_source=generator";

/// Our playlist, as an opaque embedded frame.
#[component]
pub fn PlaylistEmbed(
    #[prop(default = 350)] width: u32,
    #[prop(default = 200)] height: u32,
) -> impl IntoView {
    view! {
        <div class="embed-shell">
            <iframe
                class="playlist-embed"
                src=PLAYLIST_EMBED_URL
                width=width
                height=height
                allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
                allowfullscreen=true
                loading="lazy"
            ></iframe>
        </div>
    }
}

/// A short-video embed (third-party hosted, outside our control).
#[component]
pub fn ShortVideoEmbed(
    src: &'static str,
    #[prop(default = 315)] width: u32,
    #[prop(default = 560)] height: u32,
) -> impl IntoView {
    view! {
        <div class="embed-shell">
            <iframe
                class="short-video-embed"
                src=src
                width=width
                height=height
                allow="autoplay; encrypted-media; picture-in-picture"
                allowfullscreen=true
                loading="lazy"
            ></iframe>
        </div>
    }
}
