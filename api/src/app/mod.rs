//! Application layer
//!
//! Contains use cases and service orchestration.
//! Use cases coordinate between domain ports and presenters.

pub mod derive_address;

pub use derive_address::{
    DeriveAddressInput, DeriveAddressInteractor, DeriveAddressOutput, DeriveAddressPresenter,
    DeriveAddressUseCase,
};
