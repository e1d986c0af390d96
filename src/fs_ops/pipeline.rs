//! Run driver: enumerate, fan out, join.
//!
//! The file list is built completely before any worker starts. Each file is then handed
//! to `classify_and_copy` on a dedicated rayon pool; the parallel collect is the join
//! barrier, and because workers return outcomes instead of errors one failure never
//! stops the others.

use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::errors::SortError;

use super::classify::{CopyOutcome, classify_and_copy};
use super::copy::{CopyPrimitive, StdCopy};
use super::duplicate::PlannedTargets;
use super::walk::enumerate_files;

/// One file that could not be copied.
#[derive(Debug)]
pub struct FileFailure {
    pub source: PathBuf,
    pub error: SortError,
}

/// Aggregate of all per-file outcomes for one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub discovered: usize,
    pub copied: usize,
    pub planned: usize,
    pub skipped: usize,
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }

    fn record(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied { .. } => self.copied += 1,
            CopyOutcome::Planned { .. } => self.planned += 1,
            CopyOutcome::Skipped { .. } => self.skipped += 1,
            CopyOutcome::Failed { source, error } => self.failures.push(FileFailure { source, error }),
        }
    }
}

/// Sort `config.source` into `config.output` using the standard copy primitive.
pub fn sort_tree(config: &Config) -> Result<RunSummary, SortError> {
    sort_tree_with(config, &StdCopy::new(config.preserve_metadata))
}

/// Sort with a caller-supplied copy primitive.
///
/// Returns `Err` only for run-level failures (missing source, output not a directory,
/// worker pool). The missing-source case is logged here, once, before any work starts.
pub fn sort_tree_with<C>(config: &Config, copier: &C) -> Result<RunSummary, SortError>
where
    C: CopyPrimitive + ?Sized,
{
    let files = match enumerate_files(&config.source) {
        Ok(files) => files,
        Err(e) => {
            error!(code = e.code(), kind = e.kind(), source = %config.source.display(), error = %e, "Source directory unavailable");
            return Err(e);
        }
    };

    let mut summary = RunSummary {
        discovered: files.len(),
        ..Default::default()
    };
    if files.is_empty() {
        info!(source = %config.source.display(), "No files found; nothing to do");
        return Ok(summary);
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("ext-sorter-{i}"));
    if let Some(n) = config.workers {
        builder = builder.num_threads(n);
    }
    let pool = builder.build()?;
    debug!(files = files.len(), workers = pool.current_num_threads(), "starting copy workers");

    let planned = PlannedTargets::new();
    let outcomes: Vec<CopyOutcome> = pool.install(|| {
        files
            .par_iter()
            .map(|file| classify_and_copy(config, copier, &planned, file))
            .collect()
    });

    for outcome in outcomes {
        summary.record(outcome);
    }

    info!(
        discovered = summary.discovered,
        copied = summary.copied,
        planned = summary.planned,
        skipped = summary.skipped,
        failed = summary.failed(),
        "Run finished"
    );
    Ok(summary)
}
