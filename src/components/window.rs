use crate::analytics::track_first_drag;
use crate::model::{DragGesture, WindowEvent, WindowPhase, WindowPos, WindowRegistry};
use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::*;

/// Retro window chrome: title bar with minimize/maximize/close controls,
/// draggable by the title bar while in a normal or minimized phase.
///
/// Phase comes from the shared [`WindowRegistry`]; position is an ephemeral
/// per-window offset that is lost on reload. A window whose phase is
/// `Closed` renders nothing at all.
#[component]
pub fn Window(
    id: &'static str,
    title: &'static str,
    registry: RwSignal<WindowRegistry>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    let phase = create_memo(move |_| registry.with(|r| r.phase(id)));
    let position = create_rw_signal(WindowPos::default());
    let gesture = create_rw_signal(None::<DragGesture>);

    let dispatch = move |event: WindowEvent| registry.update(|r| r.apply(id, event));

    // Pointer tracking lives on the window object so a fast drag can't
    // escape the title bar. The listeners are no-ops outside a gesture and
    // are removed when the page is torn down.
    let move_handle = window_event_listener(ev::pointermove, move |e| {
        if let Some(g) = gesture.get_untracked() {
            position.set(g.position_during(e.client_x() as f64, e.client_y() as f64));
        }
    });
    let up_handle = window_event_listener(ev::pointerup, move |_| {
        if gesture.get_untracked().is_some() {
            gesture.set(None);
        }
    });
    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });

    let start_drag = move |e: web_sys::PointerEvent| {
        if !phase.get_untracked().draggable() {
            return;
        }
        gesture.set(Some(DragGesture::begin(
            e.client_x() as f64,
            e.client_y() as f64,
            position.get_untracked(),
        )));
        track_first_drag();
    };

    // The maximized footprint is viewport-relative CSS; the drag offset
    // must not leak into it.
    let style = move || {
        if phase.get() == WindowPhase::Maximized {
            String::new()
        } else {
            let pos = position.get();
            format!("transform: translate({}px, {}px);", pos.x, pos.y)
        }
    };

    view! {
        <Show when=move || phase.get() != WindowPhase::Closed>
            <section
                class="window"
                class:minimized=move || phase.get() == WindowPhase::Minimized
                class:maximized=move || phase.get() == WindowPhase::Maximized
                class:dragging=move || gesture.get().is_some()
                style=style
            >
                <header class="title-bar" on:pointerdown=start_drag>
                    <span class="title-bar-text">{title}</span>
                    <div class="title-bar-controls">
                        <button
                            aria-label="Minimize"
                            on:pointerdown=|e| e.stop_propagation()
                            on:click=move |_| dispatch(WindowEvent::ToggleMinimize)
                        >
                            "–"
                        </button>
                        <button
                            aria-label="Maximize"
                            on:pointerdown=|e| e.stop_propagation()
                            on:click=move |_| dispatch(WindowEvent::ToggleMaximize)
                        >
                            "▢"
                        </button>
                        <button
                            aria-label="Close"
                            on:pointerdown=|e| e.stop_propagation()
                            on:click=move |_| dispatch(WindowEvent::Close)
                        >
                            "✕"
                        </button>
                    </div>
                </header>
                <Show when=move || phase.get().shows_body()>
                    <div class="window-body">{children.with_value(|children| children())}</div>
                </Show>
            </section>
        </Show>
    }
}
