use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::supplier::{
    Supplier as DomainSupplier, SupplierContactInfo as DomainSupplierContactInfo,
};

/// Backend row for [`crate::domain::supplier::Supplier`]. Contact records
/// live in their own table and are attached by the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierRow {
    pub id: i8,
    pub name: String,
    pub website: String,
    pub address: String,
    pub tax_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupplierContactInfoRow {
    pub id: i8,
    pub supplier_id: i8,
    pub contact_name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
}

impl From<SupplierRow> for DomainSupplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            website: row.website,
            address: row.address,
            tax_id: row.tax_id,
            contact_info: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

impl From<SupplierContactInfoRow> for DomainSupplierContactInfo {
    fn from(row: SupplierContactInfoRow) -> Self {
        Self {
            id: row.id,
            supplier_id: row.supplier_id,
            contact_name: row.contact_name,
            role: row.role,
            phone: row.phone,
            email: row.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn supplier_row_converts_with_empty_contacts() {
        let row: SupplierRow = serde_json::from_value(json!({
            "id": 3,
            "name": "Acme Tools",
            "website": "https://acme.example",
            "address": "1 Factory Rd",
            "tax_id": "DK-12345678",
            "created_at": "2025-04-01T08:00:00Z",
            "updated_at": "2025-04-01T08:00:00Z"
        }))
        .unwrap();

        let supplier: DomainSupplier = row.into();
        assert_eq!(supplier.id, 3);
        assert!(supplier.contact_info.is_empty());
    }

    #[test]
    fn contact_row_converts() {
        let row: SupplierContactInfoRow = serde_json::from_value(json!({
            "id": 1,
            "supplier_id": 3,
            "contact_name": "Jo Smith",
            "role": "sales",
            "phone": "+45 11 22 33 44",
            "email": "jo@acme.example"
        }))
        .unwrap();

        let contact: DomainSupplierContactInfo = row.into();
        assert_eq!(contact.supplier_id, 3);
        assert_eq!(contact.role, "sales");
    }
}
