//! Injectable session service.
//!
//! `Session` is the single owner of auth state for the whole app: a `Copy`
//! handle over a reactive [`SessionState`] signal, provided via context from
//! the root component. Components read identity through it, forms drive
//! login and logout through it, and the API client borrows its token for the
//! `Authorization` header. There is no ambient global; anything that touches
//! the session says so in its signature.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::session::SessionState;
use crate::util::jwt::Claims;
use crate::util::token_store;

/// Handle to the app-wide session state.
///
/// Read contract: `user()`/`token()`/`loading()` reflect the current state;
/// `user()` and `loading()` are reactive reads.
/// Write contract: only `hydrate`, `login`, and `logout` mutate the state,
/// and `login`/`logout` are the only writers of durable storage.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Load the stored token once at startup and decode the identity.
    ///
    /// Safe to call again; repeated hydration with unchanged storage leaves
    /// the state untouched. A missing or malformed token means "logged out",
    /// never a fault.
    pub fn hydrate(&self) {
        let stored = token_store::read();
        self.state.update(|s| s.hydrate(stored.as_deref()));
    }

    /// Log in with the given credentials.
    ///
    /// On success the issued token is persisted for this origin and decoded
    /// into the identity. On failure the error propagates untouched and
    /// neither state nor storage changes.
    ///
    /// # Errors
    ///
    /// Whatever [`ApiClient::login`] rejected with.
    pub async fn login(&self, api: &ApiClient, email: &str, password: &str) -> Result<(), ApiError> {
        let token = api.login(email, password).await?;
        token_store::write(&token);
        self.state.update(|s| s.apply_login(&token));
        Ok(())
    }

    /// Log out: clear durable storage and the in-memory session. No network.
    pub fn logout(&self) {
        token_store::clear();
        self.state.update(SessionState::clear);
    }

    /// The decoded identity, if logged in. Reactive.
    pub fn user(&self) -> Option<Claims> {
        self.state.with(|s| s.user.clone())
    }

    /// Whether initial hydration is still pending. Reactive.
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// The raw bearer token for request headers. Untracked: attaching a
    /// header must not subscribe the caller to session changes.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }
}
