//! Filesystem operations: enumeration, bucketing, collision resolution and the copy pipeline.

mod classify;
mod copy;
mod duplicate;
mod hints;
mod metadata;
mod pipeline;
mod source;
mod walk;

pub use classify::{CopyOutcome, classify_and_copy};
pub use copy::{CopyPrimitive, StdCopy};
pub use duplicate::{DEFAULT_MAX_COLLISIONS, PlannedTargets, resolve_target};
pub use hints::{describe_io_error, io_hint};
pub use pipeline::{FileFailure, RunSummary, sort_tree, sort_tree_with};
pub use source::{NO_EXTENSION_BUCKET, SourceFile};
pub use walk::enumerate_files;
