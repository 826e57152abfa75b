//! Error types for firefly
//!
//! The highlighting core never fails; these errors only come from the
//! edges that read files or parse external tables.

use thiserror::Error;

/// Result type alias for firefly operations
pub type Result<T> = std::result::Result<T, FireflyError>;

/// Errors raised while loading configuration or external tables
#[derive(Error, Debug)]
pub enum FireflyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}
