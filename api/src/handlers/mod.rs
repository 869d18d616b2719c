//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod address;
pub mod root;

pub use address::get_address;
pub use root::{health, root};
