//! Build command: render fragments and the sitemap.

use anyhow::Result;

use crate::config::{ConfigDiagnostics, ConfigError, SiteConfig};
use crate::generator;
use crate::page::PagesFile;

/// Build all outputs for the site.
///
/// Pages diagnostics run first so nothing is written for an invalid pages
/// file. Fragment rendering and sitemap generation are independent and run
/// in parallel.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let pages = PagesFile::load(&config.pages_path())?;

    let mut diag = ConfigDiagnostics::new();
    pages.validate(&mut diag);
    diag.print_warnings();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    let (fragments, sitemap) = rayon::join(
        || generator::build_fragments(config, &pages),
        || generator::sitemap::build_sitemap(config, &pages),
    );

    fragments?;
    sitemap?;
    Ok(())
}
