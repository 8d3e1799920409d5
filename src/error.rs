//! Error types for the sarissa-jieba library.
//!
//! All errors are represented by the [`JiebaError`] enum. Configuration
//! problems, dictionary loading failures and segmentation failures each get
//! their own variant so callers can tell a bad option apart from a missing
//! dictionary file.
//!
//! # Examples
//!
//! ```
//! use sarissa_jieba::error::{JiebaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JiebaError::config("'jieba_use_hmm' must be a bool"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for sarissa-jieba operations.
#[derive(Error, Debug)]
pub enum JiebaError {
    /// I/O errors (dictionary files, CLI input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, offset mapping)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors (wrong option type, unknown filter name)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Segmenter loading errors (missing or malformed dictionary data)
    #[error("Segmenter error: {0}")]
    Segmenter(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors with attached context, raised at the CLI boundary
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with JiebaError.
pub type Result<T> = std::result::Result<T, JiebaError>;

impl JiebaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JiebaError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        JiebaError::Config(msg.into())
    }

    /// Create a new segmenter error.
    pub fn segmenter<S: Into<String>>(msg: S) -> Self {
        JiebaError::Segmenter(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JiebaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        JiebaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
