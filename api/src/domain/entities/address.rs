//! Address domain entity
//!
//! A Japanese postal address resolved from a zipcode. Created by a lookup
//! adapter and never mutated afterwards.

/// A postal address as returned by an address lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// 7-digit postal code, e.g. "1000001"
    pub zipcode: String,
    /// Prefecture (都道府県), e.g. "東京都"
    pub prefecture: String,
    /// City / ward (市区町村), e.g. "千代田区"
    pub city: String,
    /// Town area (町域), e.g. "千代田"
    pub town: String,
}

impl Address {
    pub fn new(
        zipcode: impl Into<String>,
        prefecture: impl Into<String>,
        city: impl Into<String>,
        town: impl Into<String>,
    ) -> Self {
        Self {
            zipcode: zipcode.into(),
            prefecture: prefecture.into(),
            city: city.into(),
            town: town.into(),
        }
    }
}
