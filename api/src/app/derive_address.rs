//! Derive address use case
//!
//! Resolves a zipcode through the [`AddressLookup`] port and hands the result
//! to a presenter to build the output DTO.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::Address;
use crate::domain::ports::AddressLookup;
use crate::error::LookupError;

/// Input DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveAddressInput {
    pub zipcode: String,
}

/// Output DTO
///
/// `Default` is the empty DTO (every field is an empty string) that
/// accompanies a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeriveAddressOutput {
    pub zipcode: String,
    pub prefecture: String,
    pub city: String,
    pub town: String,
}

/// Failure of the use case, paired with the empty output DTO
#[derive(Debug, Error)]
#[error("{error}")]
pub struct DeriveAddressFailure {
    pub output: DeriveAddressOutput,
    pub error: LookupError,
}

impl From<LookupError> for DeriveAddressFailure {
    fn from(error: LookupError) -> Self {
        Self {
            output: DeriveAddressOutput::default(),
            error,
        }
    }
}

/// Converts a domain [`Address`] into the output DTO
pub trait DeriveAddressPresenter: Send + Sync {
    fn output(&self, address: Address) -> DeriveAddressOutput;
}

#[async_trait]
pub trait DeriveAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        input: DeriveAddressInput,
    ) -> Result<DeriveAddressOutput, DeriveAddressFailure>;
}

/// Use case implementation
pub struct DeriveAddressInteractor<P, L>
where
    P: DeriveAddressPresenter,
    L: AddressLookup,
{
    presenter: P,
    address_lookup: L,
}

impl<P, L> DeriveAddressInteractor<P, L>
where
    P: DeriveAddressPresenter,
    L: AddressLookup,
{
    pub fn new(presenter: P, address_lookup: L) -> Self {
        Self {
            presenter,
            address_lookup,
        }
    }
}

#[async_trait]
impl<P, L> DeriveAddressUseCase for DeriveAddressInteractor<P, L>
where
    P: DeriveAddressPresenter,
    L: AddressLookup,
{
    async fn execute(
        &self,
        input: DeriveAddressInput,
    ) -> Result<DeriveAddressOutput, DeriveAddressFailure> {
        let address = self.address_lookup.lookup(&input.zipcode).await?;
        Ok(self.presenter.output(address))
    }
}
