//! Default path helpers.
//! Determines the OS-appropriate config file location.

use dirs::config_dir;
use std::env;
use std::path::PathBuf;

use super::CONFIG_ENV;

/// Config file location: `$FSKIT_CONFIG` if set, else `<config dir>/fskit/config.xml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    if let Some(mut base) = config_dir() {
        base.push("fskit");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("fskit")
                .join("config.xml")
        })
    }
}
