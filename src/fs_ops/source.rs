//! Source file model and extension bucketing.
//!
//! Bucketing policy:
//! - The bucket is the text after the last '.' of the file name, lowercased
//!   (`report.PDF` -> `pdf`), so buckets are case-insensitive.
//! - Names without an extension, dotfiles (`.env`) and names ending in a bare dot
//!   (`notes.`) go to the `no_extension` bucket.
//! - Only the last extension counts: `archive.tar.gz` -> `gz`.
//! - The file name itself keeps its original case and bytes.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Bucket used for files without an extension.
pub const NO_EXTENSION_BUCKET: &str = "no_extension";

/// A regular file discovered by the walker. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    name: OsString,
    stem: OsString,
    /// Original-case suffix including its leading dot, empty when there is none.
    suffix: OsString,
    bucket: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| path.as_os_str().to_os_string());

        let as_name = Path::new(&name);
        let ext = as_name.extension().filter(|e| !e.is_empty());
        let (stem, suffix, bucket) = match ext {
            Some(e) => {
                let stem = as_name
                    .file_stem()
                    .map(OsStr::to_os_string)
                    .unwrap_or_else(|| name.clone());
                let mut suffix = OsString::from(".");
                suffix.push(e);
                (stem, suffix, e.to_string_lossy().to_lowercase())
            }
            None => (name.clone(), OsString::new(), NO_EXTENSION_BUCKET.to_string()),
        };

        Self {
            path,
            name,
            stem,
            suffix,
            bucket,
        }
    }

    /// Full path as seen at enumeration time.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name, e.g. `x.txt`.
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Base name without its extension, e.g. `x`.
    pub fn stem(&self) -> &OsStr {
        &self.stem
    }

    /// Extension including its leading dot (original case), e.g. `.TXT`; empty if none.
    pub fn suffix(&self) -> &OsStr {
        &self.suffix
    }

    /// Bucket directory name: lowercased extension or `no_extension`.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// `{stem}_{counter}{suffix}`
    pub fn disambiguated_name(&self, counter: u64) -> OsString {
        let mut name = self.stem.clone();
        name.push(format!("_{counter}"));
        name.push(&self.suffix);
        name
    }
}
