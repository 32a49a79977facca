//! Durable bearer-token persistence.
//!
//! The raw token lives in `localStorage` under a key equal to the page
//! origin, so deployments on different origins never share a session.
//! Requires a browser environment; on the server every operation is inert.

/// Read the stored token for the current origin, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let key = window.location().origin().ok()?;
        window.local_storage().ok().flatten()?.get_item(&key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token for the current origin.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(key) = window.location().origin() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(&key, token);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token for the current origin.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(key) = window.location().origin() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(&key);
                }
            }
        }
    }
}
