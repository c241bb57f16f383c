//! DTOs exposed by the inventory API endpoints.

use serde::{Deserialize, Serialize};

pub mod payload;

/// Uniform response envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Payload carried by paged listings inside the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagedData<T> {
    pub count: u64,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    pub data: Vec<T>,
}

/// Query parameters accepted by the paged item listing.
///
/// Both values arrive as raw strings so the handlers control the error
/// envelope instead of the extractor; [`parse_page_value`] accepts only
/// integers ≥ 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    #[serde(rename = "page-size")]
    pub page_size: Option<String>,
}

impl PageParams {
    pub fn page_number(&self) -> Option<u32> {
        parse_page_value(self.page.as_deref())
    }

    pub fn page_size(&self) -> Option<u32> {
        parse_page_value(self.page_size.as_deref())
    }
}

/// Query parameters accepted by the paged item search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "page-size")]
    pub page_size: Option<String>,
}

impl SearchParams {
    pub fn page_number(&self) -> Option<u32> {
        parse_page_value(self.page.as_deref())
    }

    pub fn page_size(&self) -> Option<u32> {
        parse_page_value(self.page_size.as_deref())
    }
}

fn parse_page_value(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.parse::<u32>().ok()).filter(|v| *v >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_omits_absent_data() {
        let response: ApiResponse<()> = ApiResponse::error("Invalid ID");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": false, "message": "Invalid ID"}));
    }

    #[test]
    fn envelope_carries_data() {
        let response = ApiResponse::ok("Item retrieved successfully", json!({"id": 1}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "Item retrieved successfully",
                "data": {"id": 1}
            })
        );
    }

    #[test]
    fn paged_data_uses_camel_case_page_size() {
        let paged = PagedData {
            count: 25,
            page: 3,
            page_size: 10,
            data: vec![1, 2, 3, 4, 5],
        };
        let value = serde_json::to_value(&paged).unwrap();
        assert_eq!(
            value,
            json!({"count": 25, "page": 3, "pageSize": 10, "data": [1, 2, 3, 4, 5]})
        );
    }

    #[test]
    fn page_params_accept_dashed_key() {
        let params: PageParams =
            serde_json::from_value(json!({"page": "2", "page-size": "10"})).unwrap();
        assert_eq!(params.page_number(), Some(2));
        assert_eq!(params.page_size(), Some(10));
    }

    #[test]
    fn page_params_reject_zero_and_garbage() {
        let params = PageParams {
            page: Some("0".to_string()),
            page_size: Some("abc".to_string()),
        };
        assert_eq!(params.page_number(), None);
        assert_eq!(params.page_size(), None);

        let missing = PageParams::default();
        assert_eq!(missing.page_number(), None);
    }
}
