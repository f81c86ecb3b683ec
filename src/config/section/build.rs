//! `[build]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section: input and output locations, relative to project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Pages file listing the site's routes.
    pub pages: PathBuf,
    /// Output directory for fragments and the sitemap.
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pages: "pages.toml".into(),
            output: "dist".into(),
        }
    }
}
