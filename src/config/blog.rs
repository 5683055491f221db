//! Blog configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Configuration file name, looked up in the base directory
const CONFIG_FILE: &str = "blog.yml";

/// Blog configuration.
///
/// Every field has a documented default; a partial `blog.yml` fills only
/// the fields it names and the rest fall back field-by-field, including
/// the nested feature toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogConfig {
    /// Directory containing post sources, relative to the base directory
    pub posts_dir: String,

    /// URL prefix the blog is served under
    pub base_path: String,

    /// Number of posts per pagination slice
    pub posts_per_page: usize,

    /// Reading speed used for reading-time estimates
    pub words_per_minute: usize,

    /// Maximum length of derived excerpts, in characters
    pub excerpt_length: usize,

    /// Date display format (Moment.js-style, e.g. "YYYY-MM-DD")
    pub date_format: String,

    /// Syntect theme used for fenced code blocks
    pub syntax_theme: String,

    /// Feature toggles
    pub features: FeaturesConfig,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            base_path: "/blog".to_string(),
            posts_per_page: 10,
            words_per_minute: 200,
            excerpt_length: 150,
            date_format: "YYYY-MM-DD".to_string(),
            syntax_theme: "base16-ocean.dark".to_string(),
            features: FeaturesConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the configuration for `base_dir`: `blog.yml` when present,
    /// the documented defaults otherwise. A missing file is the common
    /// case, not an error.
    pub fn load_or_default(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Feature toggles, all enabled by default
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesConfig {
    /// Tag extraction, filtering and aggregation
    pub tags: bool,
    /// Reading-time estimation
    pub reading_time: bool,
    /// `.mdx` sources alongside `.md`
    pub mdx: bool,
    /// Social share link generation
    pub social_sharing: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            tags: true,
            reading_time: true,
            mdx: true,
            social_sharing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.base_path, "/blog");
        assert_eq!(config.posts_per_page, 10);
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.excerpt_length, 150);
        assert!(config.features.tags);
        assert!(config.features.mdx);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let yaml = r#"
postsPerPage: 5
postsDir: content
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.posts_per_page, 5);
        assert_eq!(config.posts_dir, "content");
        // Everything unset keeps its documented default
        assert_eq!(config.base_path, "/blog");
        assert_eq!(config.words_per_minute, 200);
        assert!(config.features.reading_time);
    }

    #[test]
    fn test_partial_features_merge() {
        let yaml = r#"
features:
  readingTime: false
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.features.reading_time);
        // Unnamed toggles stay on
        assert!(config.features.tags);
        assert!(config.features.mdx);
        assert!(config.features.social_sharing);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = BlogConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.posts_per_page, 10);
    }

    #[test]
    fn test_load_or_default_with_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blog.yml"), "excerptLength: 80\n").unwrap();
        let config = BlogConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.excerpt_length, 80);
        assert_eq!(config.posts_per_page, 10);
    }
}
