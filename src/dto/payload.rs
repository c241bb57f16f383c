//! Field guard applied to client-submitted JSON bodies before they reach the
//! typed domain payloads.
//!
//! Update bodies get server-owned keys stripped silently; creation bodies
//! must carry every required key. Both operate on the loosely-typed JSON
//! object so the subsequent deserialization into [`crate::domain::item`]
//! types only ever sees client-writable fields.

use serde_json::{Map, Value};
use thiserror::Error;

/// Fields the client must never set directly.
pub const PROTECTED_FIELDS: [&str; 4] = ["id", "created_at", "updated_at", "deleted_at"];

/// Fields that must be present when creating an item.
pub const ITEM_REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "description",
    "quantity",
    "price",
    "supplier_id",
    "category",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field: {0}")]
pub struct MissingField(pub String);

/// Removes the given keys from the payload in place. Absent keys are no-ops.
pub fn strip_protected_fields(payload: &mut Map<String, Value>, protected: &[&str]) {
    for field in protected {
        payload.remove(*field);
    }
}

/// Verifies every required key is present, failing with the first absent one.
pub fn require_fields(payload: &Map<String, Value>, required: &[&str]) -> Result<(), MissingField> {
    for field in required {
        if !payload.contains_key(*field) {
            return Err(MissingField((*field).to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn strips_server_owned_keys_in_place() {
        let mut payload = object(json!({
            "id": 1,
            "name": "x",
            "created_at": "t"
        }));
        strip_protected_fields(&mut payload, &PROTECTED_FIELDS);
        assert_eq!(Value::Object(payload), json!({"name": "x"}));
    }

    #[test]
    fn stripping_absent_keys_is_a_noop() {
        let mut payload = object(json!({"name": "x"}));
        strip_protected_fields(&mut payload, &PROTECTED_FIELDS);
        assert_eq!(Value::Object(payload), json!({"name": "x"}));
    }

    #[test]
    fn require_fields_names_first_missing_key() {
        let payload = object(json!({"name": "x"}));
        let err = require_fields(&payload, &["name", "price"]).unwrap_err();
        assert_eq!(err, MissingField("price".to_string()));
        assert_eq!(err.to_string(), "missing required field: price");
    }

    #[test]
    fn require_fields_passes_when_all_present() {
        let payload = object(json!({
            "name": "x",
            "description": "d",
            "quantity": 1,
            "price": 2.0,
            "supplier_id": 3,
            "category": "c"
        }));
        assert!(require_fields(&payload, &ITEM_REQUIRED_FIELDS).is_ok());
    }

    #[test]
    fn null_counts_as_present() {
        // Presence check only; type errors surface at deserialization.
        let payload = object(json!({"name": null}));
        assert!(require_fields(&payload, &["name"]).is_ok());
    }
}
