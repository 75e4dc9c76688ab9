//! Typed error definitions for plan_sync.
//! Provides the small set of fatal failure modes plus their process exit codes.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanSyncError {
    #[error("Plans directory is not usable: {}: {reason}", path.display())]
    TargetInvalid { path: PathBuf, reason: String },

    #[error("Failed to delete legacy file {}", path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write plan document {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PlanSyncError {
    /// Process exit code for this failure kind.
    /// Success exits 0 and unclassified errors exit 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            PlanSyncError::TargetInvalid { .. } => 2,
            PlanSyncError::RemoveFailed { .. } => 3,
            PlanSyncError::WriteFailed { .. } => 4,
        }
    }
}
