//! Photo collection models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::helpers::date::parse_date_string;

/// Visual orientation hint controlling gallery layout balancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// Parse an orientation from its frontmatter spelling.
    /// Anything outside the three known values is treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "landscape" => Some(Self::Landscape),
            "portrait" => Some(Self::Portrait),
            "square" => Some(Self::Square),
            _ => None,
        }
    }
}

/// One image within a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoAsset {
    /// Absolute or relative URL for the image asset
    pub src: String,

    /// Accessible alt text describing the image content
    pub alt: String,

    /// Optional caption rendered beneath the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Optional intrinsic dimensions; layout falls back to CSS
    /// aspect ratios when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// Validated metadata for one collection.
///
/// `title`, `date`, and `cover_image` fail the whole collection when
/// absent or mistyped; every optional field degrades silently instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionFrontmatter {
    pub title: String,

    /// Publication date as authored (ISO-parseable string)
    pub date: String,

    pub cover_image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lens: Option<String>,

    /// Absent and empty are distinct: a missing `tags` key stays `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_orientation: Option<Orientation>,

    /// Ordered gallery images; empty when the file declares none
    pub images: Vec<PhotoAsset>,

    /// Custom frontmatter fields passed through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// The assembled, loadable unit: metadata, body text, rendered HTML,
/// and an ordered sequence of image assets. Never mutated after
/// construction; content changes require re-authoring the source file
/// and invalidating the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoCollection {
    /// URL-safe identifier derived from the filename
    pub slug: String,

    pub frontmatter: CollectionFrontmatter,

    /// Raw markdown body, as authored
    pub content: String,

    /// Rendered HTML for the body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Human-readable reading time estimate, e.g. "3 min read"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<String>,
}

impl PhotoCollection {
    /// Parse the frontmatter date for sorting and display
    pub fn parsed_date(&self) -> Option<DateTime<Local>> {
        parse_date_string(&self.frontmatter.date)
    }
}
