//! Open Graph metadata: image URL builder and site-level tag defaults.

pub mod og;

pub use og::{OgDefaults, OgImageSpec, og_image_url};
