//! Collection loader - reads, validates, renders, and caches photo
//! collections from the content directory
//!
//! Data flows one direction: directory listing, per-slug load (parse,
//! validate, render, cache), date-sorted collection list.

use futures::future::try_join_all;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;

use super::{
    normalize_frontmatter, split_frontmatter, ContentError, MarkdownRenderer, PhotoCollection,
};
use crate::cache::TtlCache;
use crate::helpers::reading_time::reading_time;
use crate::Folio;

/// Cache tag carried by every collection entry; invalidating it
/// evicts the whole gallery at once.
pub const COLLECTIONS_TAG: &str = "collections";

/// Loads photo collections by slug, with per-slug caching
pub struct CollectionLoader {
    content_dir: PathBuf,
    renderer: MarkdownRenderer,
    cache: TtlCache<PhotoCollection>,
}

impl CollectionLoader {
    /// Create a loader using the site's configured cache window
    pub fn new(folio: &Folio) -> Self {
        let ttl = Duration::from_secs(folio.config.cache_ttl_secs);
        Self::with_cache_ttl(folio, ttl)
    }

    /// Create a loader with an explicit cache window
    pub fn with_cache_ttl(folio: &Folio, ttl: Duration) -> Self {
        Self {
            content_dir: folio.content_dir.clone(),
            renderer: MarkdownRenderer::with_theme(&folio.config.highlight.theme),
            cache: TtlCache::new(ttl),
        }
    }

    /// Enumerate available collection slugs.
    ///
    /// Keeps `.md`/`.mdx` files, skips `_`-prefixed drafts, and strips
    /// the extension. A directory-access failure is logged and yields
    /// an empty list; "no content" is an acceptable degraded state for
    /// the presentation layer.
    pub async fn list_slugs(&self) -> Vec<String> {
        let mut dir = match fs::read_dir(&self.content_dir).await {
            Ok(dir) => dir,
            Err(e) => {
                tracing::error!(
                    "Failed to read content directory {:?}: {}",
                    self.content_dir,
                    e
                );
                return Vec::new();
            }
        };

        let mut slugs = Vec::new();
        loop {
            match dir.next_entry().await {
                Ok(Some(entry)) => {
                    let is_file = entry
                        .file_type()
                        .await
                        .map(|t| t.is_file())
                        .unwrap_or(false);
                    if !is_file {
                        continue;
                    }

                    let name = entry.file_name();
                    let Some(name) = name.to_str() else { continue };
                    if name.starts_with('_') {
                        continue;
                    }
                    if let Some(slug) =
                        name.strip_suffix(".md").or_else(|| name.strip_suffix(".mdx"))
                    {
                        slugs.push(slug.to_string());
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("Failed to enumerate content directory: {}", e);
                    break;
                }
            }
        }
        slugs
    }

    /// Load one collection by slug, read-through cached.
    ///
    /// Never returns a partial collection: a missing file, a
    /// required-field failure, or a render failure fails the load.
    pub async fn load(&self, slug: &str) -> Result<PhotoCollection, ContentError> {
        let tags = [COLLECTIONS_TAG.to_string(), Self::slug_tag(slug)];
        self.cache
            .get_or_insert_with(slug, &tags, || self.load_uncached(slug))
            .await
    }

    /// Load every available collection concurrently and sort by date
    /// descending (most recent first). One failing collection fails
    /// the whole batch; callers degrade to an empty list.
    pub async fn load_all(&self) -> Result<Vec<PhotoCollection>, ContentError> {
        let slugs = self.list_slugs().await;
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let mut collections = try_join_all(slugs.iter().map(|slug| self.load(slug))).await?;

        // Unparseable dates sort last
        collections.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
        Ok(collections)
    }

    /// Evict one slug's cache entry; the next load recomputes
    pub fn invalidate(&self, slug: &str) {
        self.cache.invalidate(&Self::slug_tag(slug));
    }

    /// Evict every cached collection
    pub fn invalidate_all(&self) {
        self.cache.invalidate(COLLECTIONS_TAG);
    }

    async fn load_uncached(&self, slug: &str) -> Result<PhotoCollection, ContentError> {
        let raw = self.read_source(slug).await?;

        let (data, body) =
            split_frontmatter(&raw).map_err(|source| ContentError::Frontmatter {
                slug: slug.to_string(),
                source,
            })?;

        let frontmatter = normalize_frontmatter(slug, &data)?;

        let html = self
            .renderer
            .render(body)
            .map_err(|source| ContentError::Render {
                slug: slug.to_string(),
                source,
            })?;

        Ok(PhotoCollection {
            slug: slug.to_string(),
            frontmatter,
            reading_time: Some(reading_time(body)),
            content: body.to_string(),
            html: Some(html),
        })
    }

    /// Resolve `<slug>.md`, falling back to `<slug>.mdx`
    async fn read_source(&self, slug: &str) -> Result<String, ContentError> {
        let primary = self.content_dir.join(format!("{slug}.md"));
        if let Ok(raw) = fs::read_to_string(&primary).await {
            return Ok(raw);
        }

        let fallback = self.content_dir.join(format!("{slug}.mdx"));
        fs::read_to_string(&fallback)
            .await
            .map_err(|_| ContentError::NotFound {
                slug: slug.to_string(),
            })
    }

    fn slug_tag(slug: &str) -> String {
        format!("collection:{slug}")
    }
}
