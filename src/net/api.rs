//! REST API client for the job-board server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! The client is constructed with the session handle, so the
//! `Authorization` header attachment is an explicit dependency here rather
//! than a hidden global request hook.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::auth::Session;
use crate::net::error::ApiError;
use crate::net::types::{Job, RegisterRequest};
use crate::state::jobs::Cursor;

/// HTTP client carrying the API base URL and the session whose token is
/// attached to every request.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base_url: &'static str,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: &'static str, session: Session) -> Self {
        Self { base_url, session }
    }

    /// Exchange credentials for a bearer token via
    /// `POST /api/v1/users/login`.
    ///
    /// # Errors
    ///
    /// Fails with the transport error or the server's rejection; the caller
    /// decides how to surface it. No session state is touched here.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            struct Body<'a> {
                email: &'a str,
                password: &'a str,
            }
            #[derive(serde::Deserialize)]
            struct LoginResponse {
                token: String,
            }

            let url = format!("{}/api/v1/users/login", self.base_url);
            let resp = self.post(&url, &Body { email, password }).await?;
            let body: LoginResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    /// Create a new account via `POST /api/v1/users`, returning the new
    /// user id.
    ///
    /// # Errors
    ///
    /// A rejected registration carries the server's `message` body field
    /// when one was sent (duplicate email and similar conflicts).
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Deserialize)]
            #[serde(rename_all = "camelCase")]
            struct RegisterResponse {
                user_id: String,
            }

            let url = format!("{}/api/v1/users", self.base_url);
            let resp = self.post(&url, request).await?;
            let body: RegisterResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.user_id)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    /// Fetch one page of the job feed via `GET /api/v1/jobs`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or an unexpected
    /// response shape.
    pub async fn fetch_jobs(&self, cursor: &Cursor) -> Result<Vec<Job>, ApiError> {
        let url = jobs_url(self.base_url, cursor);
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Deserialize)]
            struct JobsResponse {
                jobs: Vec<Job>,
            }

            let resp = self.get(&url).await?;
            let body: JobsResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.jobs)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    #[cfg(feature = "hydrate")]
    async fn get(&self, url: &str) -> Result<gloo_net::http::Response, ApiError> {
        let mut req = gloo_net::http::Request::get(url);
        if let Some(token) = self.session.token() {
            req = req.header("Authorization", &token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check(resp).await
    }

    #[cfg(feature = "hydrate")]
    async fn post<B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let mut req = gloo_net::http::Request::post(url);
        if let Some(token) = self.session.token() {
            req = req.header("Authorization", &token);
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check(resp).await
    }

    /// Turn a non-success response into `ApiError::Status`, preferring the
    /// server's own `message` body field over the HTTP status text.
    #[cfg(feature = "hydrate")]
    async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }

        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let code = resp.status();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => resp.status_text(),
        };
        Err(ApiError::Status { code, message })
    }
}

/// Build the listing URL for one page.
fn jobs_url(base_url: &str, cursor: &Cursor) -> String {
    format!(
        "{base_url}/api/v1/jobs?limit={}&offset={}",
        cursor.limit, cursor.offset
    )
}
