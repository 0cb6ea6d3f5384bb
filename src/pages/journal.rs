use crate::components::{
    CounterGrid, Gallery, LoveNote, MusicToggle, PlaylistEmbed, ShortVideoEmbed, Taskbar, Window,
};
use crate::model::WindowRegistry;
use leptos::*;

const WINDOWS: &[(&str, &str)] = &[
    ("counter", "Our Days"),
    ("letter", "A Note"),
    ("playlist", "Our Songs"),
    ("photos", "Photo Booth"),
    ("journal-spring", "Spring Journal"),
    ("journal-summer", "Summer Journal"),
    ("films", "Little Films"),
    ("jukebox", "Jukebox"),
];

/// Version three: the expanded desktop: everything from version two plus
/// journal windows, a photo booth, short-film embeds, and the jukebox.
#[component]
pub fn JournalPage() -> impl IntoView {
    let registry = create_rw_signal(WindowRegistry::new());

    view! {
        <main class="desktop journal">
            <div class="desktop-backdrop">
                <Window id="counter" title="Our Days" registry=registry>
                    <CounterGrid/>
                </Window>
                <Window id="letter" title="A Note" registry=registry>
                    <LoveNote/>
                </Window>
                <Window id="playlist" title="Our Songs" registry=registry>
                    <PlaylistEmbed width=300 height=152/>
                </Window>
                <Window id="photos" title="Photo Booth" registry=registry>
                    <Gallery/>
                </Window>
                <Window id="journal-spring" title="Spring Journal" registry=registry>
                    <article class="journal-entry">
                        <h3>"The picnic by the river"</h3>
                        <p>
                            "We stayed until the streetlights came on, and you "
                            "said the ducks were judging our sandwiches. They "
                            "absolutely were. Best afternoon of the year so far."
                        </p>
                        <h3>"Rainy Tuesday"</h3>
                        <p>
                            "Power went out, so we played cards by candlelight "
                            "and you won every single hand. I demand a rematch "
                            "and I am writing it here so it's official."
                        </p>
                    </article>
                </Window>
                <Window id="journal-summer" title="Summer Journal" registry=registry>
                    <article class="journal-entry">
                        <h3>"The road trip playlist incident"</h3>
                        <p>
                            "Three hours of your songs, three minutes of mine. "
                            "I'm not bitter. The sunset over the hills made up "
                            "for all of it anyway."
                        </p>
                        <h3>"Midnight pancakes"</h3>
                        <p>
                            "Neither of us could sleep, so we made pancakes at "
                            "1am and ate them on the balcony. You get the last "
                            "one next time. Promise."
                        </p>
                    </article>
                </Window>
                <Window id="films" title="Little Films" registry=registry>
                    <ShortVideoEmbed src="https://www.youtube.com/embed/5qap5aO4i9A" width=280 height=498/>
                </Window>
                <Window id="jukebox" title="Jukebox" registry=registry>
                    <p class="jukebox-hint">"Press play for our song 🎶"</p>
                    <MusicToggle/>
                </Window>
            </div>
            <Taskbar registry=registry items=WINDOWS/>
        </main>
    }
}
