//! Error types for idiom-graph.
//!
//! All failures are represented by the [`IdiomGraphError`] enum. Every error is
//! fatal for a run: the pipeline is a one-shot batch job, so nothing is retried.
//!
//! # Examples
//!
//! ```
//! use idiom_graph::error::{IdiomGraphError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(IdiomGraphError::invalid_config("limit_num_idioms is not a number"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for idiom-graph operations.
#[derive(Error, Debug)]
pub enum IdiomGraphError {
    /// The idiom source is absent or unreadable.
    #[error("Missing input: cannot read {}: {source}", path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration value could not be parsed into its expected type.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O errors while writing artifacts
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The graph could not be rendered
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for operations that may fail with IdiomGraphError.
pub type Result<T> = std::result::Result<T, IdiomGraphError>;

impl IdiomGraphError {
    /// Create a new missing input error.
    pub fn missing_input<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        IdiomGraphError::MissingInput {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        IdiomGraphError::InvalidConfiguration(msg.into())
    }

    /// Create a new render error.
    pub fn render<S: Into<String>>(msg: S) -> Self {
        IdiomGraphError::Render(msg.into())
    }
}
