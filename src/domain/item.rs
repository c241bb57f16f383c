use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// Inventory item as exposed by the API.
///
/// `image_url` is derived from the storage bucket on read, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: String,
    pub supplier_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Creation payload. Every field is required; timestamps and the id are
/// server-owned and stamped by the repository.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: String,
    pub supplier_id: EntityId,
}

/// Partial-update payload. Protected fields (`id`, `created_at`,
/// `updated_at`, `deleted_at`) are not representable here; the field guard
/// strips them from the raw body before deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_skips_unset_fields_when_serialized() {
        let patch = ItemPatch {
            name: Some("Hammer".into()),
            ..ItemPatch::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"name": "Hammer"}));
    }

    #[test]
    fn new_item_requires_all_fields() {
        let missing_price = json!({
            "name": "Hammer",
            "description": "Claw hammer",
            "quantity": 5,
            "category": "tools",
            "supplier_id": 1
        });
        assert!(serde_json::from_value::<NewItem>(missing_price).is_err());
    }
}
