use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::item::Item as DomainItem;

/// Backend row for [`crate::domain::item::Item`], exactly as the table
/// stores it. `image_url` is not a column; the repository derives it after
/// conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRow {
    pub id: i8,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: String,
    pub supplier_id: i8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<ItemRow> for DomainItem {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            quantity: row.quantity,
            category: row.category,
            supplier_id: row.supplier_id,
            image_url: None,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_deserializes_and_converts() {
        let row: ItemRow = serde_json::from_value(json!({
            "id": 7,
            "name": "Hammer",
            "description": "Claw hammer",
            "price": 12.5,
            "quantity": 40,
            "category": "tools",
            "supplier_id": 2,
            "created_at": "2025-05-01T10:00:00Z",
            "updated_at": "2025-05-02T10:00:00Z",
            "deleted_at": null
        }))
        .unwrap();

        let item: DomainItem = row.into();
        assert_eq!(item.id, 7);
        assert_eq!(item.supplier_id, 2);
        assert_eq!(item.image_url, None);
        assert_eq!(item.deleted_at, None);
    }

    #[test]
    fn row_without_deleted_at_key_is_live() {
        let row: ItemRow = serde_json::from_value(json!({
            "id": 1,
            "name": "Nails",
            "description": "Box of nails",
            "price": 3.0,
            "quantity": 500,
            "category": "fasteners",
            "supplier_id": 1,
            "created_at": "2025-05-01T10:00:00Z",
            "updated_at": "2025-05-01T10:00:00Z"
        }))
        .unwrap();
        assert!(row.deleted_at.is_none());
    }
}
