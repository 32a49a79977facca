//! Registration page.

use leptos::prelude::*;

use crate::components::snackbar::Snackbar;
use crate::util::validate;

/// Registration form. On success the visitor is sent to the login page;
/// a rejected registration shows the server's message when it sent one.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let middle_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let first_name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let register_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::api::ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move || {
        first_name_error.set(validate::first_name(&first_name.get_untracked()));
        email_error.set(validate::email(&email.get_untracked()));
        password_error.set(validate::password(&password.get_untracked()));
        if first_name_error.get_untracked().is_some()
            || email_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
        {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let request = crate::net::types::RegisterRequest {
                first_name: first_name.get_untracked().trim().to_owned(),
                middle_name: middle_name.get_untracked().trim().to_owned(),
                last_name: last_name.get_untracked().trim().to_owned(),
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.register(&request).await {
                    Ok(user_id) => {
                        leptos::logging::log!("registered user {user_id}");
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("registration rejected: {err}");
                        let message = err
                            .server_message()
                            .unwrap_or("Registration failed. Please try again.")
                            .to_owned();
                        register_error.set(Some(message));
                    }
                }
            });
        }
    };

    let text_field = move |label: &'static str,
                           value: RwSignal<String>,
                           error: Option<RwSignal<Option<&'static str>>>| {
        view! {
            <label class="form__field">
                {label}
                <input
                    class="form__input"
                    type="text"
                    placeholder=label
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <span class="form__error">{move || error.and_then(|e| e.get())}</span>
            </label>
        }
    };

    view! {
        <div class="register-page">
            <form
                class="form"
                autocomplete="off"
                novalidate
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1 class="form__heading">"User Registration"</h1>

                {text_field("Enter first name", first_name, Some(first_name_error))}
                {text_field("Enter middle name", middle_name, None)}
                {text_field("Enter last name", last_name, None)}

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
                    "Register"
                </button>
            </form>

            <Snackbar message=register_error/>
        </div>
    }
}
