//! Site origin and canonical URL construction.
//!
//! A canonical URL is the single authoritative absolute form search engines
//! should associate with a route. The origin is passed explicitly to every
//! builder that needs it; there is no global site URL state.

use std::fmt;

/// Absolute site origin (scheme + host), stored without a trailing slash.
///
/// Invariants:
/// - No trailing `/` (trimmed at construction)
/// - Scheme and host validity are checked at config load, not here
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOrigin(String);

impl SiteOrigin {
    /// Create from a configured origin, trimming any trailing slashes.
    pub fn new(origin: impl AsRef<str>) -> Self {
        Self(origin.as_ref().trim_end_matches('/').to_string())
    }

    /// Get the origin as a string slice (no trailing slash).
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute canonical URL for a site-relative path.
    ///
    /// `path` must start with `/` (caller contract, not validated here).
    /// Because the origin carries no trailing slash, concatenation yields
    /// exactly one separator: `/buyers` becomes `<origin>/buyers` with the
    /// path preserved verbatim, and the root `/` becomes the bare origin
    /// with a trailing slash.
    pub fn canonical(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    /// Resolve a link target to absolute form.
    ///
    /// Targets that already carry an http(s) scheme pass through verbatim;
    /// site-relative paths go through [`Self::canonical`].
    pub fn resolve(&self, target: &str) -> String {
        if is_http(target) {
            target.to_string()
        } else {
            self.canonical(target)
        }
    }
}

impl fmt::Display for SiteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check if a link target carries an http(s) scheme.
#[inline]
pub fn is_http(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}
