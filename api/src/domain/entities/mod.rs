//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod address;

pub use address::Address;
