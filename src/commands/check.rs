//! Validate every collection file

use anyhow::Result;

use crate::content::CollectionLoader;
use crate::Folio;

/// Load each slug individually and report validation failures.
/// Returns an error when any file fails, so CI can gate on it.
pub async fn run(folio: &Folio) -> Result<()> {
    let loader = CollectionLoader::new(folio);
    let slugs = loader.list_slugs().await;

    if slugs.is_empty() {
        println!("No collections found in {:?}", folio.content_dir);
        return Ok(());
    }

    let mut failures = 0;
    for slug in &slugs {
        match loader.load(slug).await {
            Ok(collection) => {
                println!(
                    "  ok    {} ({} images)",
                    slug,
                    collection.frontmatter.images.len()
                );
            }
            Err(e) => {
                failures += 1;
                println!("  FAIL  {}: {}", slug, e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} collections failed validation", failures, slugs.len());
    }

    println!("All {} collections are valid", slugs.len());
    Ok(())
}
