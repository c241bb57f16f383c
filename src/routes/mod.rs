use actix_web::HttpResponse;

use crate::domain::EntityId;
use crate::dto::ApiResponse;
use crate::services::ServiceError;

pub mod item;
pub mod supplier;

/// Parses a path identifier. The API only accepts ids in `0..=127`;
/// non-numeric or out-of-range values are rejected before any backend call.
pub fn parse_entity_id(raw: &str) -> Option<EntityId> {
    raw.parse::<EntityId>().ok().filter(|id| *id >= 0)
}

pub(crate) fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
}

/// Builds the public envelope for a service failure. Private details are
/// logged at the call site, never serialized.
pub(crate) fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ApiResponse::<()>::error(err.to_string());
    match err {
        ServiceError::InvalidInput { .. } => HttpResponse::BadRequest().json(body),
        ServiceError::NotFound { .. } => HttpResponse::NotFound().json(body),
        ServiceError::Internal { .. } => HttpResponse::InternalServerError().json(body),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn entity_id_accepts_single_byte_range() {
        assert_eq!(parse_entity_id("0"), Some(0));
        assert_eq!(parse_entity_id("127"), Some(127));
    }

    #[test]
    fn entity_id_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_entity_id("128"), None);
        assert_eq!(parse_entity_id("-1"), None);
        assert_eq!(parse_entity_id("abc"), None);
        assert_eq!(parse_entity_id(""), None);
        assert_eq!(parse_entity_id("1.5"), None);
    }

    #[test]
    fn error_response_maps_taxonomy_to_statuses() {
        let invalid = ServiceError::InvalidInput {
            message: "m".into(),
            details: "d".into(),
        };
        let not_found = ServiceError::NotFound {
            message: "m".into(),
            details: "d".into(),
        };
        let internal = ServiceError::Internal {
            message: "m".into(),
            details: "d".into(),
        };

        assert_eq!(error_response(&invalid).status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_response(&not_found).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            error_response(&internal).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
