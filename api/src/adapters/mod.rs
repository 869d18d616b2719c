//! Adapters layer
//!
//! Implementations of port traits for external systems, plus the presenter
//! used by the derive address use case.

pub mod presenter;
pub mod zipcloud;

pub use presenter::AddressPresenter;
pub use zipcloud::ZipCloudAddressLookup;
