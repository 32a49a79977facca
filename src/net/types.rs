//! Wire types shared between the API client and the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A job listing as returned by `GET /api/v1/jobs`.
///
/// Read-only projection from the server; every field is an opaque scalar
/// rendered as-is (dates and budgets arrive as strings).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub skills: String,
    pub created_at: String,
    pub expired_at: String,
    pub min_budget: String,
    pub max_budget: String,
    pub user_id: String,
    pub version: String,
    pub updated_at: String,
}

/// Body for `POST /api/v1/users`. Middle and last name are optional and
/// omitted from the payload when blank.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub middle_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}
