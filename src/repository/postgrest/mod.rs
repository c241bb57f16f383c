//! PostgREST-backed repository implementation.
//!
//! One repository instance wraps a single long-lived HTTP client and is
//! shared read-only across all request handlers.

use reqwest::{Method, RequestBuilder, StatusCode, header};

use crate::repository::errors::{
    RepositoryError, RepositoryResult, normalize_backend_error,
};

mod item;
mod supplier;

/// Media type requesting exactly one row; zero or multiple matches make the
/// backend answer with a PGRST116 error.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

pub(crate) const ITEMS_TABLE: &str = "items";
pub(crate) const SUPPLIERS_TABLE: &str = "suppliers";
pub(crate) const SUPPLIER_CONTACTS_TABLE: &str = "supplier_contact_information";

const IMAGE_BUCKET: &str = "item-images";

#[derive(Clone)]
pub struct PostgrestRepository {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl PostgrestRepository {
    pub fn new(base_url: &str, secret_key: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
        })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .header("apikey", &self.secret_key)
            .bearer_auth(&self.secret_key)
    }

    fn single(&self, method: Method, table: &str) -> RequestBuilder {
        self.request(method, table).header(header::ACCEPT, SINGLE_OBJECT)
    }

    /// Public URL of the storage object holding an item image.
    pub(crate) fn public_image_url(&self, id: i8) -> String {
        format!(
            "{}/storage/v1/object/public/{IMAGE_BUCKET}/{id}",
            self.base_url
        )
    }

    /// Exact live-row count for a table under the given filters, taken from
    /// the `Content-Range` header of a zero-width range request.
    async fn exact_count(&self, table: &str, filters: &[(&str, String)]) -> RepositoryResult<u64> {
        let response = self
            .request(Method::GET, table)
            .query(&[("select", "id")])
            .query(filters)
            .header("Prefer", "count=exact")
            .header("Range-Unit", "items")
            .header(header::RANGE, "0-0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        let total = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| {
                RepositoryError::Parse("count response missing Content-Range total".to_string())
            })?;

        Ok(total)
    }
}

/// Drains a failed response and runs it through the error normalizer.
async fn read_error(response: reqwest::Response) -> RepositoryError {
    let status: StatusCode = response.status();
    match response.text().await {
        Ok(body) => normalize_backend_error(status, &body),
        Err(err) => RepositoryError::Transport(err.to_string()),
    }
}

/// Parses the total out of a `Content-Range` value such as `0-9/25` or `*/0`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.parse().ok()
}

/// PostgREST pattern for a case-insensitive substring match.
///
/// Wildcards inside the needle (`*`, `%`) are passed through unescaped and
/// widen the match; the search contract defines no escaping for them.
pub(crate) fn ilike_contains(needle: &str) -> String {
    format!("ilike.*{needle}*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_is_derived_from_base_and_id() {
        let repo = PostgrestRepository::new("https://proj.supabase.co/", "key").unwrap();
        assert_eq!(
            repo.public_image_url(7),
            "https://proj.supabase.co/storage/v1/object/public/item-images/7"
        );
    }

    #[test]
    fn content_range_total_parses_both_forms() {
        assert_eq!(parse_content_range_total("0-9/25"), Some(25));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("garbage"), None);
    }

    #[test]
    fn ilike_pattern_wraps_needle() {
        assert_eq!(ilike_contains("ham"), "ilike.*ham*");
    }
}
