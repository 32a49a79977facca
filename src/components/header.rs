//! Application header with session-dependent actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::Session;

/// App bar: title on the left; on the right either the logged-in username
/// with a logout button, or register/login links.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    let username = move || session.user().map(|u| u.username).unwrap_or_default();

    view! {
        <header class="header">
            <span class="header__title">"Job Posting Application"</span>
            <div class="header__actions">
                <Show
                    when=move || session.user().is_some()
                    fallback=|| {
                        view! {
                            <a class="btn btn--text" href="/register">"Register"</a>
                            <a class="btn btn--text" href="/login">"Login"</a>
                        }
                    }
                >
                    <span class="header__user">{username}</span>
                    <button class="btn btn--text" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
