//! Error types for tessera.

use std::io;

/// Errors produced by the tessera crates.
///
/// Resource lookups never surface these to callers directly; the cache
/// reports every failure as an absent handle and uses the variant only to
/// decide how loudly to log.
#[derive(Debug, thiserror::Error)]
pub enum TesseraError {
    #[error("invalid resource key")]
    InvalidKey,

    #[error("skin file not found: {0}")]
    Unresolved(String),

    #[error("no such file: {0}")]
    Missing(String),

    #[error("image error: {0}")]
    Image(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TesseraError>;
