#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::jwt::{self, Claims};

/// Session state: the stored bearer token, the identity decoded from it,
/// and whether initial hydration from durable storage is still pending.
///
/// `user` is derived from `token` and never mutated independently: it is
/// present exactly when a token is present and its claims decode. A token
/// that fails to decode leaves `user` empty but is kept so requests still
/// carry it; the server remains the authority on validity.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<Claims>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl SessionState {
    /// Install the token read from durable storage at startup.
    ///
    /// Decodes claims only when no identity is present yet, so repeated
    /// hydration with unchanged storage is idempotent. Always ends with
    /// `loading` cleared; a missing or undecodable token resolves to
    /// "no identity", never an error.
    pub fn hydrate(&mut self, stored: Option<&str>) {
        if self.user.is_none() {
            if let Some(token) = stored {
                self.user = jwt::decode_claims(token);
                self.token = Some(token.to_owned());
            }
        }
        self.loading = false;
    }

    /// Adopt a freshly issued token after a successful login.
    pub fn apply_login(&mut self, token: &str) {
        self.user = jwt::decode_claims(token);
        self.token = Some(token.to_owned());
    }

    /// Drop the token and identity on logout.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}
