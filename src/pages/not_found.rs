use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="panel not-found">
            <header>
                <h1>"404"</h1>
                <p class="tagline">"This page wandered off 💔"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to our story"</A>
            </nav>
        </main>
    }
}
