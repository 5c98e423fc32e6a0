//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file at the resolved location means "use defaults".
//! - Unknown fields and unparsable values are errors, so typos surface early.

use anyhow::{anyhow, Context, Result};
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
    #[serde(default, deserialize_with = "de_u32_trimmed_opt")]
    max_name_attempts: Option<u32>,
    keep_source_on_partial_copy: Option<bool>,
}

// Trims surrounding whitespace before parsing an optional u32.
fn de_u32_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    if let Some(n) = parsed.max_name_attempts {
        cfg.max_name_attempts = n;
    }
    if let Some(keep) = parsed.keep_source_on_partial_copy {
        cfg.keep_source_on_partial_copy = keep;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    let cfg = xml_to_config(parsed)
        .with_context(|| format!("invalid value in config xml '{}'", path.display()))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(cfg)
}

/// Load the config from `explicit`, or from the default location.
/// A missing default file yields `Config::default()`; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        return load_config_from_xml_path(p);
    }
    match default_config_path() {
        Some(p) if p.exists() => load_config_from_xml_path(&p),
        Some(p) => {
            debug!(path = %p.display(), "No config file; using defaults");
            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}
