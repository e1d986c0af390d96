//! Typed error definitions for ext_sorter.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Only `SourceNotFound`, `OutputNotDirectory` and `WorkerPool` end a run. Every other
//! variant is scoped to a single file and is reported by the copier, never propagated.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::io_hint;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Output path exists but is not a directory: {0}")]
    OutputNotDirectory(PathBuf),

    #[error("create bucket '{}': {source}{}", .bucket.display(), hint_suffix(.source))]
    BucketCreation {
        bucket: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("copy '{}' -> '{}': {source}{}", .from.display(), .to.display(), hint_suffix(.source))]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no free name for '{name}' in '{}' after {attempts} attempts", .bucket.display())]
    CollisionExhausted {
        bucket: PathBuf,
        name: String,
        attempts: u64,
    },

    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl SortError {
    /// Stable numeric code for log records and exit diagnostics.
    pub fn code(&self) -> u16 {
        match self {
            SortError::SourceNotFound(_) => 10,
            SortError::OutputNotDirectory(_) => 11,
            SortError::BucketCreation { .. } => 20,
            SortError::Copy { .. } => 21,
            SortError::CollisionExhausted { .. } => 22,
            SortError::WorkerPool(_) => 40,
        }
    }

    /// Short snake_case label matching the `kind` field of error records.
    pub fn kind(&self) -> &'static str {
        match self {
            SortError::SourceNotFound(_) => "source_not_found",
            SortError::OutputNotDirectory(_) => "output_not_directory",
            SortError::BucketCreation { .. } => "bucket_creation",
            SortError::Copy { .. } => "copy_failed",
            SortError::CollisionExhausted { .. } => "collision_exhausted",
            SortError::WorkerPool(_) => "worker_pool",
        }
    }

    /// True for failures that stop the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SortError::SourceNotFound(_) | SortError::OutputNotDirectory(_) | SortError::WorkerPool(_)
        )
    }
}

fn hint_suffix(e: &io::Error) -> String {
    io_hint(e).map(|h| format!(" ({h})")).unwrap_or_default()
}
