use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::{Value, json};

use crate::domain::EntityId;
use crate::domain::item::{Item, ItemPatch, NewItem};
use crate::models::item::ItemRow;
use crate::pagination::{PageBounds, page_bounds};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::postgrest::{ITEMS_TABLE, PostgrestRepository, ilike_contains, read_error};
use crate::repository::{ItemReader, ItemWriter, Pagination};

/// Insert body for a new item with the server-owned timestamps stamped at
/// `now`. `NewItem` cannot carry timestamps, so nothing client-supplied can
/// leak into the stored values.
fn stamped_create_body(new_item: &NewItem, now: DateTime<Utc>) -> RepositoryResult<Value> {
    let mut body =
        serde_json::to_value(new_item).map_err(|e| RepositoryError::Parse(e.to_string()))?;
    if let Value::Object(map) = &mut body {
        map.insert("created_at".to_string(), json!(now));
        map.insert("updated_at".to_string(), json!(now));
    }
    Ok(body)
}

/// Patch body for an update with `updated_at` stamped at `now`.
fn stamped_patch_body(updates: &ItemPatch, now: DateTime<Utc>) -> RepositoryResult<Value> {
    let mut body =
        serde_json::to_value(updates).map_err(|e| RepositoryError::Parse(e.to_string()))?;
    if let Value::Object(map) = &mut body {
        map.insert("updated_at".to_string(), json!(now));
    }
    Ok(body)
}

/// Decides whether a page fetch is needed at all: `None` means the total is
/// zero and no range query should be issued.
fn page_slice(pagination: Pagination, total: u64) -> RepositoryResult<Option<PageBounds>> {
    Ok(page_bounds(pagination.page, pagination.per_page, total)?)
}

impl PostgrestRepository {
    fn attach_image(&self, row: ItemRow) -> Item {
        let mut item: Item = row.into();
        item.image_url = Some(self.public_image_url(item.id));
        item
    }

    async fn item_page(
        &self,
        filters: &[(&str, String)],
        pagination: Pagination,
    ) -> RepositoryResult<(u64, Vec<Item>)> {
        let total = self.exact_count(ITEMS_TABLE, filters).await?;

        // Zero matches: skip the range query entirely.
        let Some(bounds) = page_slice(pagination, total)? else {
            return Ok((0, Vec::new()));
        };

        let response = self
            .request(Method::GET, ITEMS_TABLE)
            .query(&[("select", "*"), ("order", "name.asc")])
            .query(filters)
            .header("Range-Unit", "items")
            .header(reqwest::header::RANGE, format!("{}-{}", bounds.start, bounds.end))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        let rows: Vec<ItemRow> = response
            .json()
            .await
            .map_err(|e| RepositoryError::Parse(e.to_string()))?;

        let items = rows.into_iter().map(|row| self.attach_image(row)).collect();
        Ok((total, items))
    }
}

impl ItemReader for PostgrestRepository {
    async fn get_item_by_id(&self, id: EntityId) -> RepositoryResult<Item> {
        let response = self
            .single(Method::GET, ITEMS_TABLE)
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

        let row: ItemRow = response
            .json()
            .await
            .map_err(|e| RepositoryError::Parse(e.to_string()))?;

        Ok(self.attach_image(row))
    }

    async fn list_items(&self, pagination: Pagination) -> RepositoryResult<(u64, Vec<Item>)> {
        let filters = [("deleted_at", "is.null".to_string())];
        self.item_page(&filters, pagination).await
    }

    async fn search_items(
        &self,
        name: &str,
        pagination: Pagination,
    ) -> RepositoryResult<(u64, Vec<Item>)> {
        let filters = [
            ("deleted_at", "is.null".to_string()),
            ("name", ilike_contains(name)),
        ];
        self.item_page(&filters, pagination).await
    }
}

impl ItemWriter for PostgrestRepository {
    async fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item> {
        // Timestamps are server-owned: stamped here, immediately before the
        // write, regardless of anything the client sent.
        let body = stamped_create_body(new_item, Utc::now())?;

        let response = self
            .single(Method::POST, ITEMS_TABLE)
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        let row: ItemRow = response
            .json()
            .await
            .map_err(|e| RepositoryError::Parse(e.to_string()))?;

        Ok(self.attach_image(row))
    }

    async fn update_item(&self, id: EntityId, updates: &ItemPatch) -> RepositoryResult<Item> {
        let body = stamped_patch_body(updates, Utc::now())?;

        let response = self
            .single(Method::PATCH, ITEMS_TABLE)
            .query(&[("id", format!("eq.{id}")), ("deleted_at", "is.null".to_string())])
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        let row: ItemRow = response
            .json()
            .await
            .map_err(|e| RepositoryError::Parse(e.to_string()))?;

        Ok(self.attach_image(row))
    }

    async fn delete_item(&self, id: EntityId) -> RepositoryResult<()> {
        // Soft delete. The `deleted_at=is.null` filter makes a repeated
        // delete of the same row a not-found, consistent with the read path.
        let body = json!({ "deleted_at": Utc::now() });

        let response = self
            .single(Method::PATCH, ITEMS_TABLE)
            .query(&[("id", format!("eq.{id}")), ("deleted_at", "is.null".to_string())])
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        Ok(())
    }
}
