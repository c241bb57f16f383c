use crate::domain::EntityId;
use crate::domain::item::{Item, ItemPatch, NewItem};
use crate::dto::PagedData;
use crate::repository::{ItemReader, ItemWriter, Pagination};
use crate::services::{ServiceResult, map_repository};

/// Fetches a single live item by its identifier.
pub async fn get_item<R>(repo: &R, id: EntityId) -> ServiceResult<Item>
where
    R: ItemReader + ?Sized,
{
    repo.get_item_by_id(id).await.map_err(|e| {
        map_repository(
            e,
            "Item not found",
            "An error occurred while retrieving the item",
            format!("Error retrieving item with ID {id}"),
        )
    })
}

/// Persists a new item; the repository stamps the server-owned timestamps.
pub async fn create_item<R>(repo: &R, new_item: &NewItem) -> ServiceResult<Item>
where
    R: ItemWriter + ?Sized,
{
    repo.create_item(new_item).await.map_err(|e| {
        map_repository(
            e,
            "Item not found",
            "An error occurred while creating the item",
            "Error creating item".to_string(),
        )
    })
}

/// Applies a partial update to a live item.
pub async fn update_item<R>(repo: &R, id: EntityId, updates: &ItemPatch) -> ServiceResult<Item>
where
    R: ItemWriter + ?Sized,
{
    repo.update_item(id, updates).await.map_err(|e| {
        map_repository(
            e,
            "Item not found",
            "An error occurred while updating the item",
            format!("Error updating item with ID {id}"),
        )
    })
}

/// Soft-deletes a live item.
pub async fn delete_item<R>(repo: &R, id: EntityId) -> ServiceResult<()>
where
    R: ItemWriter + ?Sized,
{
    repo.delete_item(id).await.map_err(|e| {
        map_repository(
            e,
            "Item not found",
            "An error occurred while deleting the item",
            format!("Error deleting item with ID {id}"),
        )
    })
}

/// Returns one page of the item list together with the echoed paging fields.
pub async fn list_items<R>(repo: &R, page: u32, per_page: u32) -> ServiceResult<PagedData<Item>>
where
    R: ItemReader + ?Sized,
{
    let (count, data) = repo
        .list_items(Pagination { page, per_page })
        .await
        .map_err(|e| {
            map_repository(
                e,
                &format!("No items found for page {page}"),
                &format!("An error occurred while getting item page {page}"),
                format!("Error retrieving items for page {page}"),
            )
        })?;

    Ok(PagedData {
        count,
        page,
        page_size: per_page,
        data,
    })
}

/// Returns one page of the case-insensitive name search.
pub async fn search_items<R>(
    repo: &R,
    name: &str,
    page: u32,
    per_page: u32,
) -> ServiceResult<PagedData<Item>>
where
    R: ItemReader + ?Sized,
{
    let (count, data) = repo
        .search_items(name, Pagination { page, per_page })
        .await
        .map_err(|e| {
            map_repository(
                e,
                &format!("No items found for page {page}"),
                &format!("An error occurred while getting item page {page}"),
                format!("Error retrieving items for page {page}"),
            )
        })?;

    Ok(PagedData {
        count,
        page,
        page_size: per_page,
        data,
    })
}
