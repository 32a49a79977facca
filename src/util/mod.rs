//! Small shared helpers: JWT claims decoding, token persistence, and
//! form-field validation.

pub mod jwt;
pub mod token_store;
pub mod validate;
