//! Error types for the bridge analyzer.
//!
//! Errors are grouped by area: domain value construction, configuration and
//! frame loading. The iterator pipeline itself has no runtime error path;
//! incompatible stages are rejected at compile time.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for analyzer operations.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Domain value construction errors
    #[error("Type error: {0}")]
    Type(#[from] TypeError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Frame loading errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when building a bounded domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A bid level outside `1..=7`
    #[error("Bid level {0} is out of range (expected 1 to 7)")]
    LevelOutOfRange(u8),

    /// A trick with more cards than seats
    #[error("Trick has {0} cards (expected at most 4)")]
    TooManyUnits(usize),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Frame loading errors.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Image dimensions exceed limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// Unsupported image format
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Convenience type alias for analyzer results.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
