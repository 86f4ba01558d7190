//! Content module - photo collections, frontmatter, and markdown rendering

mod collection;
mod frontmatter;
pub mod loader;
mod markdown;

pub use collection::{CollectionFrontmatter, Orientation, PhotoAsset, PhotoCollection};
pub use frontmatter::{normalize_frontmatter, normalize_images, split_frontmatter};
pub use loader::CollectionLoader;
pub use markdown::MarkdownRenderer;

use thiserror::Error;

/// Errors raised while loading a photo collection.
///
/// Validation and file-resolution failures are deterministic for a
/// given file, so none of these are worth retrying.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Neither `<slug>.md` nor `<slug>.mdx` resolved
    #[error("photo collection \"{slug}\" not found (tried .md and .mdx)")]
    NotFound { slug: String },

    /// A required frontmatter field is absent or has the wrong type
    #[error("photo collection \"{slug}\" is missing a {field}")]
    MissingField { slug: String, field: &'static str },

    /// The frontmatter block is present but not valid YAML
    #[error("invalid frontmatter in \"{slug}\": {source}")]
    Frontmatter {
        slug: String,
        source: serde_yaml::Error,
    },

    /// The markdown body failed to render
    #[error("failed to render \"{slug}\": {source}")]
    Render {
        slug: String,
        source: anyhow::Error,
    },
}
