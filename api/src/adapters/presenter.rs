//! Address presenter
//!
//! Maps the domain `Address` into the use case output DTO.

use crate::app::{DeriveAddressOutput, DeriveAddressPresenter};
use crate::domain::entities::Address;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddressPresenter;

impl DeriveAddressPresenter for AddressPresenter {
    fn output(&self, address: Address) -> DeriveAddressOutput {
        DeriveAddressOutput {
            zipcode: address.zipcode,
            prefecture: address.prefecture,
            city: address.city,
            town: address.town,
        }
    }
}
