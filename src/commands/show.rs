//! Show one photo collection

use anyhow::Result;

use crate::content::CollectionLoader;
use crate::Folio;

/// Print a single collection, as a summary or as full JSON
pub async fn run(folio: &Folio, slug: &str, json: bool) -> Result<()> {
    let loader = CollectionLoader::new(folio);
    let collection = loader.load(slug).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&collection)?);
        return Ok(());
    }

    let fm = &collection.frontmatter;
    println!("{} [{}]", fm.title, collection.slug);
    println!("  date:    {}", fm.date);
    println!("  cover:   {}", fm.cover_image);
    if let Some(description) = &fm.description {
        println!("  about:   {}", description);
    }
    if let Some(location) = &fm.location {
        println!("  where:   {}", location);
    }
    if let Some(camera) = &fm.camera {
        println!("  camera:  {}", camera);
    }
    if let Some(lens) = &fm.lens {
        println!("  lens:    {}", lens);
    }
    if let Some(tags) = &fm.tags {
        println!("  tags:    {}", tags.join(", "));
    }
    println!("  images:  {}", fm.images.len());
    if let Some(reading_time) = &collection.reading_time {
        println!("  length:  {}", reading_time);
    }

    Ok(())
}
