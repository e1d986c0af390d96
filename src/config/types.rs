//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::fs_ops::DEFAULT_MAX_COLLISIONS;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Per-file records and the run summary (default)
    #[default]
    Normal,
    /// Plus enumeration and worker details
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one sorting run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory tree to scan
    pub source: PathBuf,
    /// Root that receives one bucket directory per extension
    pub output: PathBuf,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, resolve and log targets but do not modify the filesystem
    pub dry_run: bool,
    /// If true, carry timestamps (and xattrs when enabled) over to the copies
    pub preserve_metadata: bool,
    /// Worker pool size; None uses one worker per CPU
    pub workers: Option<usize>,
    /// Numbered names tried per file before giving up
    pub max_collisions: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            output: PathBuf::new(),
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            preserve_metadata: false,
            workers: None,
            max_collisions: DEFAULT_MAX_COLLISIONS,
        }
    }
}

impl Config {
    /// Construct a Config with explicit source/output; other fields use defaults.
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            ..Default::default()
        }
    }
}
