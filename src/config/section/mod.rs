//! Configuration section definitions.

mod build;
mod seo;
mod site;

pub use build::BuildConfig;
pub use seo::{SeoConfig, SitemapConfig};
pub use site::{SiteInfoConfig, SiteSectionConfig};
