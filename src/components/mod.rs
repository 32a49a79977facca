//! Reusable UI components.

pub mod header;
pub mod job_card;
pub mod job_skeleton;
pub mod route_guard;
pub mod snackbar;
