//! Test fixtures
//!
//! Factory functions for domain values and canned ZipCloud payloads.

use serde_json::{json, Value};

use crate::domain::entities::Address;

/// The address of zipcode 1000001 (Chiyoda, Tokyo)
pub fn test_address() -> Address {
    Address::new("1000001", "東京都", "千代田区", "千代田")
}

/// ZipCloud payload for a successful lookup of 1000001
pub fn zipcloud_success_body() -> Value {
    json!({
        "message": null,
        "results": [
            {
                "address1": "東京都",
                "address2": "千代田区",
                "address3": "千代田",
                "kana1": "ﾄｳｷｮｳﾄ",
                "kana2": "ﾁﾖﾀﾞｸ",
                "kana3": "ﾁﾖﾀﾞ",
                "prefcode": "13",
                "zipcode": "1000001"
            }
        ],
        "status": 200
    })
}

/// ZipCloud payload for a zipcode with no matching address
pub fn zipcloud_not_found_body() -> Value {
    json!({
        "message": null,
        "results": null,
        "status": 200
    })
}

/// ZipCloud payload for a rejected request
pub fn zipcloud_error_body(message: Option<&str>) -> Value {
    json!({
        "message": message,
        "results": null,
        "status": 400
    })
}
