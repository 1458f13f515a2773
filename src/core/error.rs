//! Error types for data files (config and high score).

use thiserror::Error;

/// Errors that can occur when reading or writing game data files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// File or its parent directory could not be written.
    #[error("Failed to write file '{path}': {details}")]
    WriteError { path: String, details: String },

    /// Value could not be encoded as RON.
    #[error("Failed to serialize: {details}")]
    SerializeError { details: String },
}
