//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::EntityId;
use crate::domain::item::{Item, ItemPatch, NewItem};
use crate::domain::supplier::Supplier;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ItemReader, ItemWriter, Pagination, SupplierReader};

mock! {
    pub Repository {}

    impl ItemReader for Repository {
        async fn get_item_by_id(&self, id: EntityId) -> RepositoryResult<Item>;
        async fn list_items(&self, pagination: Pagination) -> RepositoryResult<(u64, Vec<Item>)>;
        async fn search_items(
            &self,
            name: &str,
            pagination: Pagination,
        ) -> RepositoryResult<(u64, Vec<Item>)>;
    }

    impl ItemWriter for Repository {
        async fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item>;
        async fn update_item(&self, id: EntityId, updates: &ItemPatch) -> RepositoryResult<Item>;
        async fn delete_item(&self, id: EntityId) -> RepositoryResult<()>;
    }

    impl SupplierReader for Repository {
        async fn get_supplier_by_id(&self, id: EntityId) -> RepositoryResult<Supplier>;
    }
}
