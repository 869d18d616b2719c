//! ZipCloud adapter
//!
//! Address lookup backed by the public ZipCloud API
//! (<https://zipcloud.ibsnet.co.jp/>).

pub mod client;

pub use client::{ZipCloudAddressLookup, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
