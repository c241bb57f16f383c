use reqwest::Method;

use crate::domain::EntityId;
use crate::domain::supplier::{Supplier, SupplierContactInfo};
use crate::models::supplier::{SupplierContactInfoRow, SupplierRow};
use crate::repository::SupplierReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::postgrest::{
    PostgrestRepository, SUPPLIER_CONTACTS_TABLE, SUPPLIERS_TABLE, read_error,
};

impl PostgrestRepository {
    /// Contact records for a supplier. A not-found answer from the contact
    /// table is an empty list, not an error.
    async fn supplier_contacts(
        &self,
        supplier_id: EntityId,
    ) -> RepositoryResult<Vec<SupplierContactInfo>> {
        let response = self
            .request(Method::GET, SUPPLIER_CONTACTS_TABLE)
            .query(&[
                ("select", "*".to_string()),
                ("supplier_id", format!("eq.{supplier_id}")),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return match read_error(response).await {
                RepositoryError::NotFound => Ok(Vec::new()),
                err => Err(err),
            };
        }

        let rows: Vec<SupplierContactInfoRow> = response
            .json()
            .await
            .map_err(|e| RepositoryError::Parse(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl SupplierReader for PostgrestRepository {
    async fn get_supplier_by_id(&self, id: EntityId) -> RepositoryResult<Supplier> {
        let response = self
            .single(Method::GET, SUPPLIERS_TABLE)
            .query(&[
                ("select", "*".to_string()),
                ("id", format!("eq.{id}")),
                ("deleted_at", "is.null".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        let row: SupplierRow = response
            .json()
            .await
            .map_err(|e| RepositoryError::Parse(e.to_string()))?;

        let mut supplier: Supplier = row.into();
        supplier.contact_info = self.supplier_contacts(id).await?;

        Ok(supplier)
    }
}
