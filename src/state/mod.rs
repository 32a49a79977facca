//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `jobs`) and kept as plain structs
//! with pure transition methods, so the contracts are testable without a
//! browser. Components hold them in `RwSignal`s provided via context.

pub mod jobs;
pub mod session;
