//! Repository error taxonomy and the backend error normalizer.
//!
//! The backing store is PostgREST, which reports failures as a JSON body
//! `{code, message, details, hint}`. Normalization prefers that structured
//! form; a parenthesized-code scan of the raw text remains as a fallback for
//! bodies that are not valid JSON. The fixed code table below is the only
//! hard-coded knowledge of the backend's error contract and must be revisited
//! if that contract changes.

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::pagination::PageOutOfRange;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Backend rejected the request: {0}")]
    Validation(String),

    #[error("Backend error {code}: {message}")]
    Backend { code: String, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed backend response: {0}")]
    Parse(String),

    #[error(transparent)]
    PageOutOfRange(#[from] PageOutOfRange),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        RepositoryError::Transport(err.to_string())
    }
}

/// Structured error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    code: String,
    message: String,
}

enum CodeClass {
    Validation,
    NotFound,
}

/// Mapping table from PostgREST error codes to the taxonomy, per the
/// PostgREST error reference.
fn classify_code(code: &str) -> Option<CodeClass> {
    match code {
        "PGRST100" | "PGRST102" | "PGRST108" => Some(CodeClass::Validation),
        "PGRST116" | "PGRST121" => Some(CodeClass::NotFound),
        _ => None,
    }
}

/// Extracts the first parenthesized token from an error text, e.g.
/// `"... (PGRST116) ..."` yields `PGRST116`.
fn extract_code(text: &str) -> Option<&str> {
    let start = text.find('(')?;
    let rest = &text[start + 1..];
    let end = rest.find(')')?;
    Some(&rest[..end])
}

/// Translates a non-success backend response into the taxonomy.
///
/// Bodies without any recognizable backend marker are not backend-specific;
/// they surface as [`RepositoryError::Unexpected`] and the calling service
/// supplies its own default status and message.
pub(crate) fn normalize_backend_error(status: reqwest::StatusCode, body: &str) -> RepositoryError {
    let (code, message) = match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(parsed) if parsed.code.starts_with("PGRST") => (parsed.code, parsed.message),
        _ => {
            if !body.contains("PGRST") {
                return RepositoryError::Unexpected(format!(
                    "backend returned status {status}: {body}"
                ));
            }
            match extract_code(body) {
                Some(code) => (code.to_string(), body.to_string()),
                None => {
                    warn!("backend error marker present but no code token: {body}");
                    return RepositoryError::Unexpected(format!(
                        "backend returned status {status}: {body}"
                    ));
                }
            }
        }
    };

    match classify_code(&code) {
        Some(CodeClass::NotFound) => RepositoryError::NotFound,
        Some(CodeClass::Validation) => RepositoryError::Validation(message),
        None => {
            warn!("backend error code {code} not in mapping table: {message}");
            RepositoryError::Backend { code, message }
        }
    }
}
