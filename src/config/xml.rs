//! XML configuration support.
//! - Loads optional settings from config.xml (quick_xml + serde).
//! - A missing file is not an error and nothing is created on disk.
//! - Unknown elements are rejected so typos surface instead of being ignored.
//!
//! Example:
//!   <config>
//!     <log_level>normal</log_level>
//!     <log_file>/var/log/ext_sorter.log</log_file>
//!     <workers>8</workers>
//!     <max_collisions>10000</max_collisions>
//!     <preserve_metadata>false</preserve_metadata>
//!   </config>

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_u64_trimmed_opt")]
    workers: Option<u64>,
    #[serde(default, deserialize_with = "de_u64_trimmed_opt")]
    max_collisions: Option<u64>,
    preserve_metadata: Option<bool>,
}

// Trims surrounding whitespace for optional integers; unparsable values count as absent.
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<u64>().ok()))
}

/// Settings read from a config file. Every field is optional; unset fields leave
/// the Config untouched when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub workers: Option<usize>,
    pub max_collisions: Option<u64>,
    pub preserve_metadata: Option<bool>,
}

impl FileSettings {
    /// Overlay these settings onto `cfg`.
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(level) = &self.log_level {
            cfg.log_level = level.clone();
        }
        if let Some(p) = &self.log_file {
            cfg.log_file = Some(p.clone());
        }
        if let Some(n) = self.workers {
            cfg.workers = Some(n);
        }
        if let Some(n) = self.max_collisions {
            cfg.max_collisions = n;
        }
        if let Some(b) = self.preserve_metadata {
            cfg.preserve_metadata = b;
        }
    }
}

fn xml_to_settings(parsed: XmlConfig) -> Result<FileSettings> {
    let log_level = match parsed.log_level.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(s.parse::<LogLevel>().map_err(anyhow::Error::msg)?),
        _ => None,
    };
    let log_file = parsed
        .log_file
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    let workers = match parsed.workers {
        Some(0) => bail!("workers must be at least 1"),
        Some(n) => Some(usize::try_from(n).context("workers out of range")?),
        None => None,
    };
    let max_collisions = match parsed.max_collisions {
        Some(0) => bail!("max_collisions must be at least 1"),
        other => other,
    };

    Ok(FileSettings {
        log_level,
        log_file,
        workers,
        max_collisions,
        preserve_metadata: parsed.preserve_metadata,
    })
}

/// Load settings from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<FileSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_settings(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// Load settings from `$EXT_SORTER_CONFIG` or the default location.
///
/// Returns Ok(None) when no file exists there. An explicitly named file that is
/// missing is an error.
pub fn load_config_from_xml() -> Result<Option<FileSettings>> {
    let explicit = std::env::var_os(super::paths::CONFIG_ENV).is_some_and(|v| !v.is_empty());
    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        if explicit {
            bail!("config file named by {} does not exist: {}", super::paths::CONFIG_ENV, path.display());
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }
    load_config_from_xml_path(&path).map(Some)
}
