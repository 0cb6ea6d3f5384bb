use crate::components::{CounterGrid, Gallery, LoveNote, PlaylistEmbed, Taskbar, Window};
use crate::model::WindowRegistry;
use leptos::*;

/// Fixed set of windows on this desktop; ids double as registry keys.
const WINDOWS: &[(&str, &str)] = &[
    ("counter", "Our Days"),
    ("letter", "A Note"),
    ("playlist", "Our Songs"),
    ("gallery", "Memories"),
];

/// Version two: the retro desktop. Same content as the landing page,
/// re-framed as draggable windows over a backdrop, with a taskbar for
/// whatever got minimized.
#[component]
pub fn DesktopPage() -> impl IntoView {
    let registry = create_rw_signal(WindowRegistry::new());

    view! {
        <main class="desktop">
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
                <Window id="gallery" title="Memories" registry=registry>
                    <Gallery/>
                </Window>
            </div>
            <Taskbar registry=registry items=WINDOWS/>
        </main>
    }
}
