//! Top-level routed pages.

pub mod jobs;
pub mod login;
pub mod register;
