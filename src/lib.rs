pub mod analytics;
pub mod components;
pub mod haptics;
pub mod model;
pub mod pages;

use components::NavBar;
use leptos::*;
use leptos_router::*;
use pages::{DesktopPage, HomePage, JournalPage, NotFoundPage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// On `popstate`, the router updates its internal location signal but doesn't
/// always trigger the `<Routes>` component to re-evaluate which view to show.
/// A full reload on popstate re-initializes the WASM app at the correct URL;
/// nothing here persists, so a reload costs us nothing but the counter tick.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(
            "popstate",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="panel error-container">
                <h2>"Something went wrong 💔"</h2>
                <p>"Try refreshing the page."</p>
                <ul>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
                <button on:click=move |_| {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }>"Reload"</button>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Inner root holding the router. Wrapped by ErrorBoundary so
/// initialization panics are caught.
#[component]
fn RootInner() -> impl IntoView {
    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/desktop" view=DesktopPage/>
                <Route path="/journal" view=JournalPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    setup_popstate_reload();
    mount_to_body(Root);
}
