//! Error types for the fundraising page

use thiserror::Error;

/// Main error type for page operations
#[derive(Error, Debug)]
pub enum PageError {
    /// A document region a component needs is not on the page
    #[error("Region not found: {0}")]
    MissingRegion(String),

    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Raised amount is negative or not a finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Asynchronous clipboard write was rejected
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Legacy copy command failed or was refused
    #[error("Copy command failed: {0}")]
    CopyCommand(String),

    /// A platform capability could not be set up
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageError::MissingRegion("progress-fill".to_string());
        assert_eq!(format!("{}", err), "Region not found: progress-fill");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let page_err: PageError = serde_err.into();
        assert!(matches!(page_err, PageError::Serialization(_)));
    }
}
