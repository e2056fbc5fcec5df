//! Error types and error handling

use thiserror::Error;

/// Crate-wide result alias
pub type BlogHomeResult<T> = Result<T, BlogHomeError>;

/// Error type for page composition and its collaborators
#[derive(Debug, Error)]
pub enum BlogHomeError {
    /// A copy fragment was requested that the loader does not know
    #[error("Copy fragment not found: {0}")]
    CopyNotFound(String),

    /// Page numbers start at 1
    #[error("Invalid page number: {0} (pages start at 1)")]
    InvalidPage(u32),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Entry listings could not be decoded
    #[error("Invalid entry listings: {0}")]
    Listings(#[from] serde_json::Error),

    /// Configuration could not be loaded or failed type conversion
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Configuration could not be serialized to TOML
    #[error("Configuration serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for BlogHomeError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
