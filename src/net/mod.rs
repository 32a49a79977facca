//! Network layer: REST client and wire types for the job-board API.

pub mod api;
pub mod error;
pub mod types;
