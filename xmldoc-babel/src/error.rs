//! Error types for the fallible edges of a conversion

use thiserror::Error;

/// Translation itself never fails; these cover decoding input and naming pipeline stages.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Declaration records could not be decoded
    #[error("Invalid declaration input: {0}")]
    InvalidInput(#[from] serde_json::Error),
    /// Stage name not recognized
    #[error("Unknown stage '{0}'")]
    UnknownStage(String),
}
