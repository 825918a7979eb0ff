use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the `codeview` binary.
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    /// A source or config file could not be read.
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    /// Writing to the terminal failed.
    Io(#[from] std::io::Error),

    #[error("invalid config '{path}': {source}")]
    /// The config file is not valid JSON for [`crate::config::Config`].
    Config {
        /// The config file.
        path: PathBuf,
        /// The JSON error.
        source: serde_json::Error,
    },

    #[error("JSON output error: {0}")]
    /// The snapshot could not be serialized.
    Json(#[from] serde_json::Error),

    #[error("unknown theme '{0}' (expected vs-dark, light, dracula or nord)")]
    /// The theme name is not one of the built-in themes.
    UnknownTheme(String),
}
