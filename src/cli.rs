//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - SOURCE and OUTPUT are required unless --print-config is given.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Copy every file under SOURCE into OUTPUT/<extension>/, concurrently.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort a directory tree into per-extension folders (copies, never moves)"
)]
pub struct Args {
    /// Directory to scan recursively.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath, required_unless_present = "print_config")]
    pub source: Option<PathBuf>,

    /// Directory that receives one sub-folder per extension.
    #[arg(value_name = "OUTPUT", value_hint = ValueHint::DirPath, required_unless_present = "print_config")]
    pub output: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Append logs to this file as well as stdout")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Number of copy workers (default: one per CPU).
    #[arg(short = 'j', long, value_parser = clap::value_parser!(u64).range(1..), help = "Number of concurrent copy workers")]
    pub workers: Option<u64>,

    /// Give up on a name after this many numbered candidates.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..), help = "Maximum numbered names tried per colliding file")]
    pub max_collisions: Option<u64>,

    /// Dry-run: log planned targets but do not modify the filesystem.
    #[arg(
        long,
        help = "Show where each file would go, but do not create or copy anything"
    )]
    pub dry_run: bool,

    /// Preserve timestamps (and xattrs when enabled) on the copies.
    #[arg(
        long,
        help = "Preserve timestamps and permissions (and xattrs when enabled); slower"
    )]
    pub preserve_metadata: bool,

    /// Print where ext_sorter will look for the config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(src) = &self.source {
            cfg.source = src.clone();
        }
        if let Some(out) = &self.output {
            cfg.output = out.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(p) = &self.log_file {
            cfg.log_file = Some(p.clone());
        }
        if let Some(n) = self.workers {
            cfg.workers = usize::try_from(n).ok();
        }
        if let Some(n) = self.max_collisions {
            cfg.max_collisions = n;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.preserve_metadata {
            cfg.preserve_metadata = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
