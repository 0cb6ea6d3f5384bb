use leptos::*;

const MEMORIES: &[(&str, &str)] = &[
    ("💑", "Memory #1"),
    ("🥰", "Memory #2"),
    ("💕", "Memory #3"),
    ("🌹", "Memory #4"),
    ("💐", "Memory #5"),
    ("🎉", "Memory #6"),
];

/// Grid of memory cards. Placeholder art until the real photos go in.
#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <div class="gallery-grid">
            {MEMORIES
                .iter()
                .map(|&(art, caption)| {
                    view! {
                        <figure class="memory-card">
                            <div class="memory-art">{art}</div>
                            <figcaption class="memory-caption">{caption}</figcaption>
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}
