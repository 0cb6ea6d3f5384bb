use leptos::*;
use leptos_router::{use_location, A};

/// Small top nav between the three versions of the site.
#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |href: &'static str| {
        let current = pathname();
        if current == href || (href != "/" && current.starts_with(href)) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"Our Story"</A>
                <div class="nav-links">
                    <A href="/" class=move || link_class("/")>"Home"</A>
                    <A href="/desktop" class=move || link_class("/desktop")>"Desktop"</A>
                    <A href="/journal" class=move || link_class("/journal")>"Journal"</A>
                </div>
            </div>
        </nav>
    }
}
