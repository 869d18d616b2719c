//! Test utilities
//!
//! Manual stub implementations and test fixtures for unit testing.
//!
//! The stubs are hand-written rather than generated: each one returns a
//! fixed outcome and records the zipcodes it was asked for.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
