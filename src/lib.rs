//! Core library for `ext_sorter`.
//!
//! Walks a source tree, then copies every regular file into `output/<extension>/`
//! on a worker pool. Name clashes inside a bucket get a `_1`, `_2`, ... suffix, and a
//! failed copy is logged and counted without affecting the other files.
//!
//! ```no_run
//! use ext_sorter::{Config, sort_tree};
//!
//! let summary = sort_tree(&Config::new("downloads", "sorted"))?;
//! println!("copied {} of {}", summary.copied, summary.discovered);
//! # Ok::<(), ext_sorter::SortError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod shutdown;

pub use config::{Config, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use errors::SortError;
pub use fs_ops::{
    CopyOutcome, CopyPrimitive, FileFailure, NO_EXTENSION_BUCKET, PlannedTargets, RunSummary,
    SourceFile, StdCopy,
    classify_and_copy, enumerate_files, resolve_target, sort_tree, sort_tree_with,
};
