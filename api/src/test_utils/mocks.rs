//! Stub implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::entities::Address;
use crate::domain::ports::AddressLookup;
use crate::error::LookupError;

// ============================================================================
// Stub Address Lookup
// ============================================================================

/// Returns the same outcome for every zipcode
pub struct StubAddressLookup {
    outcome: Result<Address, LookupError>,
    calls: RwLock<Vec<String>>,
}

impl StubAddressLookup {
    /// Every lookup succeeds with `address`
    pub fn found(address: Address) -> Self {
        Self {
            outcome: Ok(address),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Every lookup fails with `error`
    pub fn failing(error: LookupError) -> Self {
        Self {
            outcome: Err(error),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Zipcodes looked up so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl AddressLookup for StubAddressLookup {
    async fn lookup(&self, zipcode: &str) -> Result<Address, LookupError> {
        self.calls.write().unwrap().push(zipcode.to_string());
        self.outcome.clone()
    }
}

// ============================================================================
// Panicking Address Lookup
// ============================================================================

/// Simulates a programming fault inside the lookup chain
pub struct PanickingAddressLookup;

#[async_trait]
impl AddressLookup for PanickingAddressLookup {
    async fn lookup(&self, _zipcode: &str) -> Result<Address, LookupError> {
        panic!("lookup exploded");
    }
}
