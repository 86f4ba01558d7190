//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory holding photo collection markdown files,
    // relative to the base directory
    pub content_dir: String,

    /// How long a loaded collection stays cached, in seconds
    pub cache_ttl_secs: u64,

    #[serde(default)]
    pub highlight: HighlightConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Editorial Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            content_dir: "content/photography".to_string(),
            cache_ttl_secs: 3600,

            highlight: HighlightConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// syntect theme used for fenced code blocks
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content/photography");
        assert_eq!(config.cache_ttl_secs, 3600);
    }

    #[test]
    fn test_parse_config_with_extra_fields() {
        let yaml = r#"
title: Doeshing — Editorial Portfolio
content_dir: galleries
cache_ttl_secs: 60
social: https://github.com/doeshing
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Doeshing — Editorial Portfolio");
        assert_eq!(config.content_dir, "galleries");
        assert_eq!(config.cache_ttl_secs, 60);
        assert!(config.extra.contains_key("social"));
        // Untouched fields keep their defaults
        assert_eq!(config.language, "en");
    }
}
