//! Error types for the portfolio

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog parsed but violates an invariant (duplicate or empty ids, etc.)
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Site configuration could not be used
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Contact form failed its presence checks
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The contact submitter reported a failure
    #[error("Submit failed: {0}")]
    Submit(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
