//! Per-file classify-and-copy.
//!
//! Steps for one file: derive the bucket, create it (idempotent), pick a free name,
//! copy. Exactly one log record is emitted per attempt: info with source and target on
//! success, error with source and cause on failure. Failures are returned as a
//! `CopyOutcome::Failed` value and never escape to sibling workers.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::errors::SortError;
use crate::shutdown;

use super::copy::CopyPrimitive;
use super::duplicate::{PlannedTargets, resolve_target};
use super::hints::io_hint;
use super::source::SourceFile;

/// Terminal state of one file.
#[derive(Debug)]
pub enum CopyOutcome {
    Copied {
        source: PathBuf,
        target: PathBuf,
        bytes: u64,
    },
    /// Dry-run: the target that would have been used.
    Planned { source: PathBuf, target: PathBuf },
    /// Not attempted because shutdown was requested first.
    Skipped { source: PathBuf },
    Failed { source: PathBuf, error: SortError },
}

impl CopyOutcome {
    pub fn source(&self) -> &std::path::Path {
        match self {
            CopyOutcome::Copied { source, .. }
            | CopyOutcome::Planned { source, .. }
            | CopyOutcome::Skipped { source }
            | CopyOutcome::Failed { source, .. } => source,
        }
    }
}

/// Copy one file into `config.output/<bucket>/` and report the result.
///
/// `planned` is shared by every file of a run; it is only consulted in dry-run mode.
pub fn classify_and_copy<C>(
    config: &Config,
    copier: &C,
    planned: &PlannedTargets,
    file: &SourceFile,
) -> CopyOutcome
where
    C: CopyPrimitive + ?Sized,
{
    let source = file.path().to_path_buf();
    if shutdown::is_requested() {
        debug!(source = %source.display(), "shutdown requested; not starting copy");
        return CopyOutcome::Skipped { source };
    }

    match place_file(config, copier, planned, file) {
        Ok(Placed::Copied { target, bytes }) => {
            info!(source = %source.display(), target = %target.display(), bytes, "Copied file");
            CopyOutcome::Copied { source, target, bytes }
        }
        Ok(Placed::Planned { target }) => {
            info!(source = %source.display(), target = %target.display(), "dry-run: would copy file");
            CopyOutcome::Planned { source, target }
        }
        Err(e) => {
            let hint = match &e {
                SortError::BucketCreation { source, .. } | SortError::Copy { source, .. } => {
                    io_hint(source).unwrap_or("")
                }
                _ => "",
            };
            error!(code = e.code(), kind = e.kind(), source = %source.display(), error = %e, hint, "Copy failed");
            CopyOutcome::Failed { source, error: e }
        }
    }
}

enum Placed {
    Copied { target: PathBuf, bytes: u64 },
    Planned { target: PathBuf },
}

fn place_file<C>(
    config: &Config,
    copier: &C,
    planned: &PlannedTargets,
    file: &SourceFile,
) -> Result<Placed, SortError>
where
    C: CopyPrimitive + ?Sized,
{
    let bucket_dir = config.output.join(file.bucket());

    if config.dry_run {
        let target = planned.reserve(&bucket_dir, file, config.max_collisions)?;
        return Ok(Placed::Planned { target });
    }

    // create_dir_all treats a directory created concurrently by another worker as success.
    fs::create_dir_all(&bucket_dir).map_err(|source| SortError::BucketCreation {
        bucket: bucket_dir.clone(),
        source,
    })?;

    let target = resolve_target(&bucket_dir, file, config.max_collisions)?;
    let bytes = copier
        .copy(file.path(), &target)
        .map_err(|source| SortError::Copy {
            from: file.path().to_path_buf(),
            to: target.clone(),
            source,
        })?;

    Ok(Placed::Copied { target, bytes })
}
