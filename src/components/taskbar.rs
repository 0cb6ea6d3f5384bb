use crate::model::{WindowEvent, WindowRegistry};
use leptos::*;

/// Bottom bar listing minimized windows; clicking one restores it.
/// Closed windows never appear here; closing is for keeps.
#[component]
pub fn Taskbar(
    registry: RwSignal<WindowRegistry>,
    items: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <footer class="taskbar">
            <span class="taskbar-brand">"💖"</span>
            {move || {
                registry
                    .with(|r| r.minimized(items))
                    .into_iter()
                    .map(|(id, title)| {
                        view! {
                            <button
                                class="taskbar-item"
                                on:click=move |_| {
                                    registry.update(|r| r.apply(id, WindowEvent::ToggleMinimize))
                                }
                            >
                                {title}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </footer>
    }
}
