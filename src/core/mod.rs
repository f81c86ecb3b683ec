//! Core types shared across builders and generators.

pub mod url;

pub use url::SiteOrigin;
