use leptos::*;

#[component]
pub fn LoveNote() -> impl IntoView {
    view! {
        <blockquote class="love-note">
            <p>
                "\"Every sunrise with you feels like the first day of forever. "
                "Your smile lights up my world, your laugh is my favorite song, "
                "and your love is my greatest treasure. Thank you for being "
                "the most beautiful part of my story. I love you more than "
                "words could ever express. 💕\""
            </p>
            <footer class="love-note-signature">"- Forever Yours 💖"</footer>
        </blockquote>
    }
}
