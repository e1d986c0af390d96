//! Collision resolution inside a bucket.
//!
//! Policy: keep the original name when free, otherwise try `{stem}_{n}{suffix}` for
//! n = 1, 2, 3, ... until a free name is found or `max_attempts` numbered names were tried.
//!
//! Notes:
//! - This only looks at the filesystem state at call time. Two workers resolving the same
//!   name in the same bucket can both pick it; the later copy then replaces the earlier one.
//!   Nothing here locks or reserves the chosen path on disk.
//! - Dry runs write nothing, so `PlannedTargets` remembers the names already handed out
//!   and later files sharing a name are planned onto the next free counter.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::trace;

use crate::errors::SortError;

use super::source::SourceFile;

/// Default cap on numbered candidates per file.
pub const DEFAULT_MAX_COLLISIONS: u64 = 10_000;

/// Pick the first free destination for `file` inside `bucket_dir`.
pub fn resolve_target(
    bucket_dir: &Path,
    file: &SourceFile,
    max_attempts: u64,
) -> Result<PathBuf, SortError> {
    first_free(bucket_dir, file, max_attempts, |p| p.exists())
}

fn first_free<F>(
    bucket_dir: &Path,
    file: &SourceFile,
    max_attempts: u64,
    is_taken: F,
) -> Result<PathBuf, SortError>
where
    F: Fn(&Path) -> bool,
{
    let candidate = bucket_dir.join(file.name());
    if !is_taken(&candidate) {
        return Ok(candidate);
    }

    for n in 1..=max_attempts {
        let candidate = bucket_dir.join(file.disambiguated_name(n));
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
        if n == 3 {
            trace!(name = ?file.name(), dir = %bucket_dir.display(), "duplicate: multiple collisions, still searching");
        }
    }

    Err(SortError::CollisionExhausted {
        bucket: bucket_dir.to_path_buf(),
        name: file.name().to_string_lossy().into_owned(),
        attempts: max_attempts,
    })
}

/// Targets handed out during a dry run.
#[derive(Debug, Default)]
pub struct PlannedTargets {
    taken: Mutex<HashSet<PathBuf>>,
}

impl PlannedTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like `resolve_target`, but also skips names planned earlier in this run, then
    /// records the chosen one.
    pub fn reserve(
        &self,
        bucket_dir: &Path,
        file: &SourceFile,
        max_attempts: u64,
    ) -> Result<PathBuf, SortError> {
        let mut taken = self.taken.lock().unwrap_or_else(PoisonError::into_inner);
        let target = first_free(bucket_dir, file, max_attempts, |p| {
            taken.contains(p) || p.exists()
        })?;
        taken.insert(target.clone());
        Ok(target)
    }
}
