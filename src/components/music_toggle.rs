use leptos::*;

/// Background-music control backed by a hidden looping `<audio>` element.
///
/// The audio element only exists while playing. If the track fails to load
/// (missing asset, unsupported codec) the error handler clears the playing
/// flag and disables the control, the one explicit error path on the site.
#[component]
pub fn MusicToggle() -> impl IntoView {
    let (is_playing, set_is_playing) = create_signal(false);
    let (available, set_available) = create_signal(true);

    let on_error = move |_| {
        web_sys::console::warn_1(&"Background track failed to load; music disabled".into());
        set_is_playing.set(false);
        set_available.set(false);
    };

    let icon = move || {
        if !available.get() {
            "🔇"
        } else if is_playing.get() {
            "⏸"
        } else {
            "🎵"
        }
    };

    view! {
        <button
            class="music-toggle"
            aria-label="Toggle background music"
            disabled=move || !available.get()
            on:click=move |_| set_is_playing.update(|p| *p = !*p)
        >
            {icon}
        </button>
        <Show when=move || is_playing.get()>
            <audio src="/love-song.mp3" autoplay=true loop=true class="hidden" on:error=on_error></audio>
        </Show>
    }
}
