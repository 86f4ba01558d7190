//! List photo collections

use anyhow::Result;

use crate::content::CollectionLoader;
use crate::Folio;

/// Print every collection, newest first.
///
/// A failing batch load degrades to an empty listing; `check` exists
/// for per-file diagnosis.
pub async fn run(folio: &Folio) -> Result<()> {
    let loader = CollectionLoader::new(folio);
    let collections = match loader.load_all().await {
        Ok(collections) => collections,
        Err(e) => {
            tracing::error!("Failed to load collections: {}", e);
            Vec::new()
        }
    };

    println!("Collections ({}):", collections.len());
    for collection in collections {
        let date = collection
            .parsed_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| collection.frontmatter.date.clone());
        println!(
            "  {} - {} [{}]",
            date, collection.frontmatter.title, collection.slug
        );
    }

    Ok(())
}

/// Print the enumerated slugs, one per line
pub async fn slugs(folio: &Folio) -> Result<()> {
    let loader = CollectionLoader::new(folio);
    for slug in loader.list_slugs().await {
        println!("{slug}");
    }
    Ok(())
}
