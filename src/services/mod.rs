use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod item;
pub mod supplier;

/// Public error taxonomy. `message` is client-safe and serialized in the
/// envelope; `details` is diagnostic, logged by the handlers and never sent
/// to the client.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{message}")]
    InvalidInput { message: String, details: String },

    #[error("{message}")]
    NotFound { message: String, details: String },

    #[error("{message}")]
    Internal { message: String, details: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn details(&self) -> &str {
        match self {
            ServiceError::InvalidInput { details, .. }
            | ServiceError::NotFound { details, .. }
            | ServiceError::Internal { details, .. } => details,
        }
    }
}

/// Maps a repository failure into the public taxonomy.
///
/// The not-found message is entity-specific and supplied by the calling
/// service; everything not recognizably a client fault falls back to the
/// operation's default message. The original error text always lands in the
/// private details.
pub(crate) fn map_repository(
    err: RepositoryError,
    not_found_message: &str,
    fallback_message: &str,
    context: String,
) -> ServiceError {
    let details = format!("{context}: {err}");
    match err {
        RepositoryError::NotFound => ServiceError::NotFound {
            message: not_found_message.to_string(),
            details,
        },
        RepositoryError::Validation(_) => ServiceError::InvalidInput {
            message: fallback_message.to_string(),
            details,
        },
        RepositoryError::PageOutOfRange(_) => ServiceError::InvalidInput {
            message: "Page out of range".to_string(),
            details,
        },
        _ => ServiceError::Internal {
            message: fallback_message.to_string(),
            details,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageOutOfRange;

    #[test]
    fn not_found_takes_entity_message_and_keeps_details() {
        let err = map_repository(
            RepositoryError::NotFound,
            "Item not found",
            "An error occurred while retrieving the item",
            "Error retrieving item with ID 5".to_string(),
        );
        match err {
            ServiceError::NotFound { message, details } => {
                assert_eq!(message, "Item not found");
                assert!(details.starts_with("Error retrieving item with ID 5"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn page_out_of_range_is_invalid_input() {
        let err = map_repository(
            RepositoryError::PageOutOfRange(PageOutOfRange {
                page: 4,
                per_page: 10,
                total: 25,
            }),
            "No items found for page 4",
            "An error occurred while getting item page 4",
            "Error retrieving items for page 4".to_string(),
        );
        match err {
            ServiceError::InvalidInput { message, details } => {
                assert_eq!(message, "Page out of range");
                assert!(details.contains("total count 25"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn transport_errors_fall_back_to_internal() {
        let err = map_repository(
            RepositoryError::Transport("connection refused".to_string()),
            "Item not found",
            "An error occurred while retrieving the item",
            "Error retrieving item with ID 5".to_string(),
        );
        match err {
            ServiceError::Internal { message, details } => {
                assert_eq!(message, "An error occurred while retrieving the item");
                assert!(details.contains("connection refused"));
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
