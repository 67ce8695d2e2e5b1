use thiserror::Error;

/// Result type specialized for recovery operations.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Result type specialized for share document ingestion.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Errors that can arise while recovering a secret from shares.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error(
        "No valid polynomial found: threshold {threshold} over {shares} shares"
    )]
    NoValidPolynomial { threshold: usize, shares: usize },
    #[error("Share count mismatch: document declares {declared}, found {actual}")]
    ShareCountMismatch { declared: usize, actual: usize },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while turning a share document into shares.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read share document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed share document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid number in field `{field}`: {text:?}")]
    InvalidNumber { field: &'static str, text: String },
    #[error("Share identifier {0:?} is not an integer")]
    InvalidIdentifier(String),
    #[error("Share {identifier:?}: unsupported base {base}, expected 2..=36")]
    InvalidBase { identifier: String, base: u32 },
    #[error("Share {identifier:?}: {value:?} is not a valid base-{base} number")]
    InvalidValue {
        identifier: String,
        base: u32,
        value: String,
    },
}
