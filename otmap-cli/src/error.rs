//! CLI error types.

use std::path::PathBuf;

use otmap::OtbmError;
use thiserror::Error;

/// Errors reported to the user by the `otmap` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: OtbmError,
    },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No house with id {0} in map")]
    UnknownHouse(u32),

    #[error("{failed} of {total} footprints could not be written")]
    RenderFailures { failed: usize, total: usize },
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UnknownHouse(_) => 2,
            _ => 1,
        }
    }
}
