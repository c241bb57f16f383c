use crate::domain::EntityId;
use crate::domain::supplier::Supplier;
use crate::repository::SupplierReader;
use crate::services::{ServiceResult, map_repository};

/// Fetches a single live supplier with its contact records attached.
pub async fn get_supplier<R>(repo: &R, id: EntityId) -> ServiceResult<Supplier>
where
    R: SupplierReader + ?Sized,
{
    repo.get_supplier_by_id(id).await.map_err(|e| {
        map_repository(
            e,
            "Supplier not found",
            "An error occurred while retrieving the supplier",
            format!("Error retrieving supplier with ID {id}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::supplier::SupplierContactInfo;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn sample_supplier(id: EntityId) -> Supplier {
        Supplier {
            id,
            name: "Acme Tools".to_string(),
            website: "https://acme.example".to_string(),
            address: "1 Factory Rd".to_string(),
            tax_id: "DK-12345678".to_string(),
            contact_info: vec![SupplierContactInfo {
                id: 1,
                supplier_id: id,
                contact_name: "Jo Smith".to_string(),
                role: "sales".to_string(),
                phone: "+45 11 22 33 44".to_string(),
                email: "jo@acme.example".to_string(),
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[actix_web::test]
    async fn get_supplier_returns_contacts() {
        let mut repo = MockRepository::new();
        repo.expect_get_supplier_by_id()
            .returning(|id| Ok(sample_supplier(id)));

        let supplier = get_supplier(&repo, 3).await.unwrap();
        assert_eq!(supplier.id, 3);
        assert_eq!(supplier.contact_info.len(), 1);
    }

    #[actix_web::test]
    async fn get_supplier_remaps_not_found_message() {
        let mut repo = MockRepository::new();
        repo.expect_get_supplier_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let err = get_supplier(&repo, 3).await.unwrap_err();
        match err {
            ServiceError::NotFound { message, .. } => {
                assert_eq!(message, "Supplier not found");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
