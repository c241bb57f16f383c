use crate::domain::EntityId;
use crate::domain::item::{Item, ItemPatch, NewItem};
use crate::domain::supplier::Supplier;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod postgrest;

/// 1-based page request used by the paged listings.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

#[allow(async_fn_in_trait)]
pub trait ItemReader {
    async fn get_item_by_id(&self, id: EntityId) -> RepositoryResult<Item>;
    /// Returns the total live-row count together with the requested page,
    /// ordered by name ascending.
    async fn list_items(&self, pagination: Pagination) -> RepositoryResult<(u64, Vec<Item>)>;
    /// Case-insensitive substring search on the item name.
    async fn search_items(
        &self,
        name: &str,
        pagination: Pagination,
    ) -> RepositoryResult<(u64, Vec<Item>)>;
}

#[allow(async_fn_in_trait)]
pub trait ItemWriter {
    async fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item>;
    async fn update_item(&self, id: EntityId, updates: &ItemPatch) -> RepositoryResult<Item>;
    /// Soft delete: stamps `deleted_at`, leaving the row in place.
    async fn delete_item(&self, id: EntityId) -> RepositoryResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait SupplierReader {
    /// Fetches a supplier with its contact records attached.
    async fn get_supplier_by_id(&self, id: EntityId) -> RepositoryResult<Supplier>;
}
