use thiserror::Error;

pub type ImportResult<T> = Result<T, ImportError>;

/// Failures that abort a whole import. Problems with a single record never
/// surface here; they are collected in the import report instead.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid file: expected {{ recipes: [...] }} or an array.")]
    UnexpectedShape,
}
