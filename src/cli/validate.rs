//! Validate command: full diagnostics without writing output.

use anyhow::Result;

use crate::config::{ConfigDiagnostics, ConfigError, SiteConfig};
use crate::log;
use crate::page::PagesFile;

/// Validate the pages file against route invariants.
///
/// Config validation already ran during load; this adds the pages checks
/// and reports a summary. Returns an error (non-zero exit) on any error
/// diagnostic; warnings are printed but do not fail.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let pages = PagesFile::load(&config.pages_path())?;

    let mut diag = ConfigDiagnostics::new();
    pages.validate(&mut diag);
    diag.print_warnings();

    let total = pages.pages.len();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    log!("validate"; "{} page{} ok", total, if total == 1 { "" } else { "s" });
    Ok(())
}
