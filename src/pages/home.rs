use crate::components::{CounterGrid, Gallery, Hero, LoveNote, MusicToggle, SecretModal};
use crate::model::SecretUnlock;
use leptos::*;

/// Version one of the site: the scrolling landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    // Secret state is per-visit; the modal lives at page level so it can
    // overlay every section.
    let secret = create_rw_signal(SecretUnlock::new());

    view! {
        <main class="landing">
            <Hero secret=secret/>

            <section class="panel">
                <h2>"Our Love Story Counter ⏳"</h2>
                <CounterGrid/>
            </section>

            <section class="panel tinted">
                <h2>"Our Beautiful Memories 📸"</h2>
                <Gallery/>
            </section>

            <section class="panel">
                <h2>"A Note From My Heart ✍️"</h2>
                <LoveNote/>
            </section>

            <section class="panel tinted">
                <h2>"Our Love Story Video 🎥"</h2>
                <div class="video-placeholder">
                    <span class="video-placeholder-art">"🎬"</span>
                    <p>"Add your special video here 💕"</p>
                </div>
            </section>

            <SecretModal secret=secret/>
            <MusicToggle/>
        </main>
    }
}
