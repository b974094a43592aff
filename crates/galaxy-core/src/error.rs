//! Error types for configuration loading.

/// Error type for configuration loading and validation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error from filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arena cannot hold the grid and the player lane
    #[error("Arena {width}x{height} is smaller than the minimum {min_width}x{min_height}")]
    ArenaTooSmall {
        width: f64,
        height: f64,
        min_width: f64,
        min_height: f64,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
