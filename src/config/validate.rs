//! Config validation logic.
//! Checks both roots before any work starts, source first, so a missing source is
//! reported as such whatever state the output path is in.

use std::fs;
use tracing::{debug, warn};

use crate::errors::SortError;

use super::types::Config;

impl Config {
    /// Validate both roots and warn about overlapping roots.
    ///
    /// - `source` must exist and be a directory.
    /// - `output` may be missing (it is created lazily with the first bucket) but if it
    ///   exists it must be a directory.
    /// - `output` inside `source` is allowed: enumeration finishes before any copy, so
    ///   fresh copies are never re-sorted within the same run. A later run will pick them up.
    pub fn validate(&self) -> Result<(), SortError> {
        if !fs::metadata(&self.source).is_ok_and(|m| m.is_dir()) {
            return Err(SortError::SourceNotFound(self.source.clone()));
        }

        if let Ok(meta) = fs::metadata(&self.output)
            && !meta.is_dir()
        {
            return Err(SortError::OutputNotDirectory(self.output.clone()));
        }

        let src_real = fs::canonicalize(&self.source).unwrap_or_else(|_| self.source.clone());
        let out_real = std::path::absolute(&self.output).unwrap_or_else(|_| self.output.clone());
        let out_real = fs::canonicalize(&out_real).unwrap_or(out_real);
        if out_real.starts_with(&src_real) {
            warn!(
                source = %src_real.display(),
                output = %out_real.display(),
                "output lies inside source; later runs will re-sort earlier copies"
            );
        }

        debug!(
            source = %self.source.display(),
            output = %self.output.display(),
            workers = ?self.workers,
            dry_run = self.dry_run,
            "config validated"
        );
        Ok(())
    }
}
