//! Config validation.

use anyhow::{bail, Result};
use tracing::debug;

use super::types::Config;

impl Config {
    /// Reject settings the directory component cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_name_attempts == 0 {
            bail!("max_name_attempts must be at least 1");
        }
        if let Some(lf) = &self.log_file
            && lf.as_os_str().is_empty()
        {
            bail!("log_file must not be empty when set");
        }
        debug!(
            max_name_attempts = self.max_name_attempts,
            keep_source = self.keep_source_on_partial_copy,
            "Config validated"
        );
        Ok(())
    }
}
