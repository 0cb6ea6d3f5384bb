use crate::analytics::track_event;
use crate::haptics::vibrate_tick;
use crate::model::SecretUnlock;
use leptos::*;

/// The heart that hides the easter egg. Three taps reveal the modal;
/// every tap gets a haptic tick.
#[component]
pub fn SecretHeart(secret: RwSignal<SecretUnlock>) -> impl IntoView {
    let on_click = move |_| {
        vibrate_tick();
        let mut crossed = false;
        secret.update(|s| crossed = s.record_click());
        if crossed {
            track_event("secret-unlocked");
        }
    };

    view! {
        <button class="secret-heart" aria-label="A heart with a secret" on:click=on_click>
            "💖"
        </button>
    }
}

/// The one-shot reveal. Clicking the dimmed backdrop or the close button
/// dismisses it; clicks inside the card do not bubble out.
#[component]
pub fn SecretModal(secret: RwSignal<SecretUnlock>) -> impl IntoView {
    let dismiss = move |_| secret.update(|s| s.dismiss());

    view! {
        <Show when=move || secret.with(|s| s.visible)>
            <div class="modal-overlay" on:click=dismiss>
                <div class="modal-card" on:click=|e| e.stop_propagation()>
                    <div class="modal-emoji">"🎉"</div>
                    <h3>"Secret Message Unlocked!"</h3>
                    <p>
                        "You found the secret! Just like how you found your way "
                        "into my heart, you discovered this hidden message. "
                        "You are my greatest adventure! 💖"
                    </p>
                    <button class="modal-close" on:click=dismiss>"Close 💕"</button>
                </div>
            </div>
        </Show>
    }
}
