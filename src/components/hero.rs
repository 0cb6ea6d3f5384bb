use crate::components::{PlaylistEmbed, SecretHeart};
use crate::model::SecretUnlock;
use leptos::*;

/// Full-height hero: the secret heart, the headline, the playlist, and a
/// handful of drifting background hearts (pure CSS keyframes).
#[component]
pub fn Hero(secret: RwSignal<SecretUnlock>) -> impl IntoView {
    let floaters = (0..6)
        .map(|i| {
            let style = format!(
                "left: {}%; top: {}%; animation-delay: {}ms; animation-duration: {}ms;",
                10 + i * 15,
                20 + (i % 3) * 20,
                i * 300,
                3000 + i * 500,
            );
            view! { <span class="floating-heart" style=style>"💖"</span> }
        })
        .collect_view();

    view! {
        <section class="hero">
            {floaters}
            <div class="hero-inner">
                <SecretHeart secret=secret/>
                <h1 class="hero-title">"For the Love of My Life"</h1>
                <p class="hero-tagline">"💖 Every moment with you is a treasure 💖"</p>
                <PlaylistEmbed/>
            </div>
        </section>
    }
}
