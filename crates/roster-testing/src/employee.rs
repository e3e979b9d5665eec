//! Canned employee payloads.

use roster_domain::employee::EmployeeDraft;
use serde_json::{Value, json};

/// The reference well-formed submission.
pub fn ann_lee() -> Value {
    json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "employeeId": "E1",
        "email": "a@b.com",
        "phoneNumber": "1234567890",
        "department": "HR",
        "dateOfJoining": "2024-01-01",
        "role": "Analyst",
    })
}

/// A second well-formed submission sharing no unique key with [`ann_lee`].
pub fn bob_kim() -> Value {
    json!({
        "firstName": "Bob",
        "lastName": "Kim",
        "employeeId": "E2",
        "email": "bob@example.com",
        "phoneNumber": "0987654321",
        "countryCode": "+1",
        "department": "Engineering",
        "dateOfJoining": "2023-05-01",
        "role": "Engineer",
    })
}

/// [`ann_lee`] as a draft.
pub fn ann_lee_draft() -> EmployeeDraft {
    serde_json::from_value(ann_lee()).expect("ann_lee payload is a valid draft")
}

/// Copy of `payload` with `key` replaced by `value`.
pub fn with_field(mut payload: Value, key: &str, value: impl Into<Value>) -> Value {
    payload[key] = value.into();
    payload
}

/// Copy of `payload` with `key` removed.
pub fn without_field(mut payload: Value, key: &str) -> Value {
    if let Some(map) = payload.as_object_mut() {
        map.remove(key);
    }
    payload
}
