use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// Supplier with its nested contact records.
///
/// `contact_info` is attached on read from the contact table and is never
/// null on the wire; a supplier without contacts carries an empty array.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    pub website: String,
    pub address: String,
    pub tax_id: String,
    #[serde(default)]
    pub contact_info: Vec<SupplierContactInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Contact record owned by exactly one supplier. Its lifetime is tied to the
/// supplier row; there is no independent API for it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SupplierContactInfo {
    pub id: EntityId,
    pub supplier_id: EntityId,
    pub contact_name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
}
