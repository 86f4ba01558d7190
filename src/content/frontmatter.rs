//! Frontmatter parsing and normalization
//!
//! Collections are authored as a YAML frontmatter block followed by a
//! markdown body. Normalization turns the untyped YAML mapping into a
//! validated [`CollectionFrontmatter`]: the three required fields fail
//! the whole record, everything optional degrades silently.

use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

use super::{CollectionFrontmatter, ContentError, Orientation, PhotoAsset};

/// Frontmatter keys consumed by normalization; everything else is
/// passed through in `extra`.
const KNOWN_KEYS: &[&str] = &[
    "title",
    "date",
    "coverImage",
    "description",
    "location",
    "camera",
    "lens",
    "tags",
    "featured",
    "coverOrientation",
    "images",
];

/// Split a leading `---` YAML frontmatter block from the body.
///
/// Returns the parsed mapping and the remaining markdown. A file
/// without a frontmatter block yields an empty mapping and the full
/// content; a well-delimited block that is not valid YAML is an error.
pub fn split_frontmatter(content: &str) -> Result<(Mapping, &str), serde_yaml::Error> {
    let trimmed = content.trim_start_matches('\u{feff}');
    if !trimmed.starts_with("---") {
        return Ok((Mapping::new(), content));
    }

    let rest = &trimmed[3..];
    let Some(end) = rest.find("\n---") else {
        // No closing delimiter, treat as plain content
        return Ok((Mapping::new(), content));
    };

    let yaml = &rest[..end];
    let body = rest[end + 4..].trim_start_matches(['\n', '\r']);

    if yaml.trim().is_empty() {
        return Ok((Mapping::new(), body));
    }

    let mapping: Mapping = serde_yaml::from_str(yaml)?;
    Ok((mapping, body))
}

/// Normalize an untyped frontmatter mapping into a validated
/// [`CollectionFrontmatter`]. Pure function of its inputs, no I/O.
pub fn normalize_frontmatter(
    slug: &str,
    data: &Mapping,
) -> Result<CollectionFrontmatter, ContentError> {
    let title = required_string(data, "title", slug, "title")?;
    let date = required_string(data, "date", slug, "date")?;
    let cover_image = required_string(data, "coverImage", slug, "cover image")?;

    let tags = data.get("tags").and_then(Value::as_sequence).map(|seq| {
        seq.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });

    let mut extra = HashMap::new();
    for (key, value) in data {
        if let Some(key) = key.as_str() {
            if !KNOWN_KEYS.contains(&key) {
                extra.insert(key.to_string(), value.clone());
            }
        }
    }

    Ok(CollectionFrontmatter {
        title,
        date,
        cover_image,
        description: optional_string(data, "description"),
        location: optional_string(data, "location"),
        camera: optional_string(data, "camera"),
        lens: optional_string(data, "lens"),
        tags,
        featured: data.get("featured").and_then(Value::as_bool),
        cover_orientation: optional_orientation(data, "coverOrientation"),
        images: normalize_images(data.get("images")),
        extra,
    })
}

/// Normalize a raw `images` value into an ordered list of assets.
///
/// An entry survives only when it is a mapping with string `src` and
/// `alt`; all other fields are type-checked individually and omitted
/// when they fail. Non-sequence input yields an empty list.
pub fn normalize_images(images: Option<&Value>) -> Vec<PhotoAsset> {
    let Some(seq) = images.and_then(Value::as_sequence) else {
        return Vec::new();
    };

    seq.iter().filter_map(normalize_image).collect()
}

fn normalize_image(item: &Value) -> Option<PhotoAsset> {
    let map = item.as_mapping()?;

    let src = map.get("src")?.as_str()?.to_string();
    let alt = map.get("alt")?.as_str()?.to_string();

    Some(PhotoAsset {
        src,
        alt,
        caption: map
            .get("caption")
            .and_then(Value::as_str)
            .map(str::to_string),
        width: map.get("width").and_then(as_dimension),
        height: map.get("height").and_then(as_dimension),
        orientation: map
            .get("orientation")
            .and_then(Value::as_str)
            .and_then(Orientation::parse),
    })
}

fn as_dimension(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    // YAML tooling that round-trips through floats emits `width: 1600.0`;
    // accept it as long as the value is a whole non-negative number
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= 0.0 && f <= f64::from(u32::MAX) {
        Some(f as u32)
    } else {
        None
    }
}

fn required_string(
    data: &Mapping,
    key: &str,
    slug: &str,
    field: &'static str,
) -> Result<String, ContentError> {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ContentError::MissingField {
            slug: slug.to_string(),
            field,
        })
}

fn optional_string(data: &Mapping, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

fn optional_orientation(data: &Mapping, key: &str) -> Option<Orientation> {
    data.get(key)
        .and_then(Value::as_str)
        .and_then(Orientation::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_split_frontmatter() {
        let content = "---\ntitle: Dunes\ndate: 2024-01-15\n---\n\nBody text.\n";
        let (data, body) = split_frontmatter(content).unwrap();
        assert_eq!(data.get("title").unwrap().as_str(), Some("Dunes"));
        assert_eq!(body, "Body text.\n");
    }

    #[test]
    fn test_split_without_frontmatter() {
        let content = "Just a body, no header.\n";
        let (data, body) = split_frontmatter(content).unwrap();
        assert!(data.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_split_unclosed_block_is_plain_content() {
        let content = "---\ntitle: never closed\n";
        let (data, body) = split_frontmatter(content).unwrap();
        assert!(data.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_split_empty_block() {
        let content = "---\n---\nBody.\n";
        let (data, body) = split_frontmatter(content).unwrap();
        assert!(data.is_empty());
        assert_eq!(body, "Body.\n");
    }

    #[test]
    fn test_normalize_valid_frontmatter() {
        let data = mapping(
            r#"
title: Coastal Light
date: 2024-01-15
coverImage: /images/cover.jpg
location: Lisbon
tags:
  - street
  - sea
featured: true
coverOrientation: portrait
"#,
        );
        let fm = normalize_frontmatter("coastal-light", &data).unwrap();
        assert_eq!(fm.title, "Coastal Light");
        assert_eq!(fm.date, "2024-01-15");
        assert_eq!(fm.cover_image, "/images/cover.jpg");
        assert_eq!(fm.location.as_deref(), Some("Lisbon"));
        assert_eq!(fm.tags, Some(vec!["street".to_string(), "sea".to_string()]));
        assert_eq!(fm.featured, Some(true));
        assert_eq!(fm.cover_orientation, Some(Orientation::Portrait));
        assert!(fm.images.is_empty());
    }

    #[test]
    fn test_missing_title_fails() {
        let data = mapping("date: 2024-01-15\ncoverImage: /c.jpg\n");
        let err = normalize_frontmatter("dunes", &data).unwrap_err();
        match err {
            ContentError::MissingField { slug, field } => {
                assert_eq!(slug, "dunes");
                assert_eq!(field, "title");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mistyped_required_field_fails() {
        // A numeric title is as bad as a missing one
        let data = mapping("title: 42\ndate: 2024-01-15\ncoverImage: /c.jpg\n");
        let err = normalize_frontmatter("dunes", &data).unwrap_err();
        assert!(matches!(err, ContentError::MissingField { field: "title", .. }));
    }

    #[test]
    fn test_missing_cover_image_names_the_field() {
        let data = mapping("title: Dunes\ndate: 2024-01-15\n");
        let err = normalize_frontmatter("dunes", &data).unwrap_err();
        assert_eq!(
            err.to_string(),
            "photo collection \"dunes\" is missing a cover image"
        );
    }

    #[test]
    fn test_optional_fields_drop_silently_on_wrong_type() {
        let data = mapping(
            r#"
title: Dunes
date: 2024-01-15
coverImage: /c.jpg
description: 12
featured: yep
coverOrientation: diagonal
tags: not-a-list
"#,
        );
        let fm = normalize_frontmatter("dunes", &data).unwrap();
        assert_eq!(fm.description, None);
        assert_eq!(fm.featured, None);
        assert_eq!(fm.cover_orientation, None);
        // Non-sequence tags propagate as absent, not as empty
        assert_eq!(fm.tags, None);
    }

    #[test]
    fn test_tags_filter_non_strings() {
        let data = mapping(
            "title: Dunes\ndate: 2024-01-15\ncoverImage: /c.jpg\ntags: [street, 7, sea]\n",
        );
        let fm = normalize_frontmatter("dunes", &data).unwrap();
        assert_eq!(fm.tags, Some(vec!["street".to_string(), "sea".to_string()]));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let data = mapping(
            "title: Dunes\ndate: 2024-01-15\ncoverImage: /c.jpg\nfilm: Portra 400\n",
        );
        let fm = normalize_frontmatter("dunes", &data).unwrap();
        assert_eq!(
            fm.extra.get("film").and_then(Value::as_str),
            Some("Portra 400")
        );
    }

    #[test]
    fn test_normalize_images_drop_policy() {
        let value: Value = serde_yaml::from_str(
            r#"
- src: a
  alt: b
- alt: missing-src
- src: c
  alt: d
  orientation: bogus
"#,
        )
        .unwrap();
        let images = normalize_images(Some(&value));
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].src, "a");
        assert_eq!(images[0].alt, "b");
        assert_eq!(images[1].src, "c");
        // Invalid orientation is dropped, not the entry
        assert_eq!(images[1].orientation, None);
    }

    #[test]
    fn test_normalize_images_optional_fields() {
        let value: Value = serde_yaml::from_str(
            r#"
- src: a
  alt: b
  caption: dawn
  width: 1600
  height: 1067
  orientation: landscape
- src: e
  alt: f
  caption: 3
  width: wide
"#,
        )
        .unwrap();
        let images = normalize_images(Some(&value));
        assert_eq!(images[0].caption.as_deref(), Some("dawn"));
        assert_eq!(images[0].width, Some(1600));
        assert_eq!(images[0].height, Some(1067));
        assert_eq!(images[0].orientation, Some(Orientation::Landscape));
        // Mistyped optionals dropped individually, entry survives
        assert_eq!(images[1].caption, None);
        assert_eq!(images[1].width, None);
    }

    #[test]
    fn test_normalize_images_float_dimensions() {
        let value: Value = serde_yaml::from_str(
            r#"
- src: a
  alt: b
  width: 1600.0
  height: 1067.5
"#,
        )
        .unwrap();
        let images = normalize_images(Some(&value));
        // Integral floats keep their value, fractional ones drop
        assert_eq!(images[0].width, Some(1600));
        assert_eq!(images[0].height, None);
    }

    #[test]
    fn test_normalize_images_non_sequence_is_empty() {
        let value = Value::String("not a list".to_string());
        assert!(normalize_images(Some(&value)).is_empty());
        assert!(normalize_images(None).is_empty());
    }
}
