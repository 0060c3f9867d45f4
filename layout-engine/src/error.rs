//! Error types for the layout engine

use thiserror::Error;

/// Main error type for layout operations
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid breakpoint table: {0}")]
    InvalidBreakpoints(String),

    #[error("Invalid site configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
