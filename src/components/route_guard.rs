//! Route access control.
//!
//! The render/redirect decision is a pure function of the current identity
//! and the route's parameters, recomputed on every evaluation — nothing is
//! cached across identity changes. The wrapper components apply a decision
//! by navigating inside an `Effect`, and hold off entirely while the session
//! is still hydrating so a slow startup never flashes a redirect.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::Session;

/// Outcome of evaluating a guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Show the wrapped view.
    Render,
    /// Send the visitor to the login view.
    RedirectLogin,
    /// Send the visitor to the default view.
    RedirectHome,
}

/// Guard for views that require a logged-in session.
pub fn private_route(identity_present: bool) -> RouteDecision {
    if identity_present {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectLogin
    }
}

/// Guard for public views. A `restricted` view (login, register) is also
/// inaccessible to an already-authenticated session.
pub fn public_route(identity_present: bool, restricted: bool) -> RouteDecision {
    if identity_present && restricted {
        RouteDecision::RedirectHome
    } else {
        RouteDecision::Render
    }
}

/// Wraps a view that only a logged-in session may see; anyone else is
/// redirected to `/login`.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.loading() {
            return;
        }
        if private_route(session.user().is_some()) == RouteDecision::RedirectLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || {
            !session.loading()
                && private_route(session.user().is_some()) == RouteDecision::Render
        }>{children()}</Show>
    }
}

/// Wraps a view anyone may see; when `restricted`, an already-authenticated
/// session is redirected to the default view instead.
#[component]
pub fn PublicRoute(#[prop(optional)] restricted: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.loading() {
            return;
        }
        if public_route(session.user().is_some(), restricted) == RouteDecision::RedirectHome {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || {
            !session.loading()
                && public_route(session.user().is_some(), restricted) == RouteDecision::Render
        }>{children()}</Show>
    }
}
