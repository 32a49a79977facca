//! Dismissible transient error notification.

use leptos::prelude::*;

/// How long a message stays up before hiding itself.
#[cfg(feature = "hydrate")]
const AUTO_HIDE: std::time::Duration = std::time::Duration::from_secs(6);

/// Error snackbar bound to an optional message signal.
///
/// Shows while the signal holds a message; the close button clears it, and
/// it also clears itself after [`AUTO_HIDE`] unless a newer message has
/// replaced it in the meantime.
#[component]
pub fn Snackbar(message: RwSignal<Option<String>>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(current) = message.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(AUTO_HIDE).await;
            message.update(|m| {
                if m.as_deref() == Some(current.as_str()) {
                    *m = None;
                }
            });
        });
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="snackbar snackbar--error" role="alert">
                <span class="snackbar__text">{move || message.get().unwrap_or_default()}</span>
                <button class="snackbar__close" on:click=move |_| message.set(None)>
                    "\u{2715}"
                </button>
            </div>
        </Show>
    }
}
