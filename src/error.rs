// src/error.rs
//
// Error types shared by the decoder and the comparison pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallCheckError {
    /// The sample source could not read or parse the recording.
    #[error("failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// A capability needed for this input was not compiled into the build.
    #[error("missing dependency: {0}")]
    MissingDependency(String),
}

impl CallCheckError {
    pub fn decode(path: &Path, reason: impl ToString) -> Self {
        CallCheckError::Decode {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CallCheckError>;
