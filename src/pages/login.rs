//! Login page: email + password form backed by the session service.

use leptos::prelude::*;

use crate::components::snackbar::Snackbar;
use crate::util::validate;

/// Login form. Fields validate locally on submit; only a clean form reaches
/// the network. Bad credentials surface as a dismissible snackbar with no
/// session or storage change.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let login_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::auth::Session>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::api::ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move || {
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        email_error.set(validate::email(&email_value));
        password_error.set(validate::password(&password_value));
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&api, email_value.trim(), &password_value).await {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(err) => {
                        leptos::logging::warn!("login rejected: {err}");
                        login_error.set(Some("Please verify your credentials!".to_owned()));
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <form
                class="form"
                autocomplete="off"
                novalidate
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1 class="form__heading">"Job Posting Login"</h1>

                <label class="form__field">
                    "Enter email address"
                    <input
                        class="form__input"
                        type="email"
                        placeholder="Enter email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <span class="form__error">{move || email_error.get()}</span>
                </label>

                <label class="form__field">
                    "Enter password"
                    <input
                        class="form__input"
                        type="password"
                        placeholder="Enter password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="form__error">{move || password_error.get()}</span>
                </label>

                <button class="btn btn--primary form__submit" type="submit">
                    "Login"
                </button>
            </form>

            <Snackbar message=login_error/>
        </div>
    }
}
