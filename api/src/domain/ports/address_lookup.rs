//! Address lookup port trait
//!
//! Defines the interface for resolving a postal code into an address.
//! Concrete implementations (external APIs) live in the adapters layer.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::Address;
use crate::error::LookupError;

/// Resolves a zipcode into an [`Address`]
///
/// Every failure (unknown code, malformed code, upstream unavailable) comes
/// back as a [`LookupError`]. Implementations must not retry.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup(&self, zipcode: &str) -> Result<Address, LookupError>;
}

#[async_trait]
impl<T: AddressLookup + ?Sized> AddressLookup for Arc<T> {
    async fn lookup(&self, zipcode: &str) -> Result<Address, LookupError> {
        (**self).lookup(zipcode).await
    }
}
