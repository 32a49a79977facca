//! API base-URL resolution.
//!
//! Each deployment host maps to its API origin. An unmapped host falls back
//! to the empty string, meaning requests use same-origin relative URLs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Known deployment hosts and the API origin each one talks to.
const HOSTS: &[(&str, &str)] = &[
    ("localhost", "http://localhost:5000"),
    ("jobboard.fly.dev", "https://jobboard-api.fly.dev"),
];

/// Resolve the API base URL for the current browser host.
pub fn base_url() -> &'static str {
    base_url_for_host(&current_hostname())
}

/// Resolve the API base URL for a given hostname.
pub fn base_url_for_host(host: &str) -> &'static str {
    HOSTS
        .iter()
        .find(|(h, _)| *h == host)
        .map_or("", |(_, url)| url)
}

fn current_hostname() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
