//! Domain layer
//!
//! - `entities`: the `Address` value type
//! - `ports`: trait definitions for external dependencies

pub mod entities;
pub mod ports;
