//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::post::Author;

/// Front-matter parsing errors.
///
/// A file without any metadata block is fine; a block that is opened and
/// never closed, or that cannot be decoded, is the one failure that
/// propagates to the caller.
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front-matter block opened but never closed")]
    UnterminatedBlock,

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),
}

/// Custom deserializer that accepts both a single string and a list of
/// strings, so `tags: rust` and `tags: [rust, web]` both work
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Metadata block at the head of a post source file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<String>,
    pub author: Option<Author>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    /// Slug override; the filename is used when absent
    pub slug: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a leading metadata block from `content`.
    ///
    /// Returns the parsed front matter and the remaining body. YAML blocks
    /// are fenced by `---`, JSON blocks by `;;;` or a leading `{...}`
    /// object. Content without a block yields defaults plus the whole text.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let rest = &content[3..];

        let Some(end) = rest.find("\n---") else {
            return Err(FrontMatterError::UnterminatedBlock);
        };

        let block = &rest[..end];
        let remaining = rest[end + 4..].trim_start_matches(['\n', '\r']);

        if block.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter = serde_yaml::from_str(block)?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), FrontMatterError> {
        if let Some(rest) = content.strip_prefix(";;;") {
            let Some(end) = rest.find(";;;") else {
                return Err(FrontMatterError::UnterminatedBlock);
            };
            let fm: FrontMatter = serde_json::from_str(&rest[..end])?;
            let remaining = rest[end + 3..].trim_start_matches(['\n', '\r']);
            return Ok((fm, remaining));
        }

        // Leading `{ ... }` object: match braces to find where it ends
        let mut depth = 0usize;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let fm: FrontMatter = serde_json::from_str(&content[..=i])?;
                        let remaining = content[i + 1..].trim_start_matches(['\n', '\r']);
                        return Ok((fm, remaining));
                    }
                }
                _ => {}
            }
        }

        Err(FrontMatterError::UnterminatedBlock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: "2025-03-03"
tags:
  - rust
  - web
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.date, Some("2025-03-03".to_string()));
        assert_eq!(fm.tags, vec!["rust", "web"]);
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_scalar_tags_become_list() {
        let content = "---\ntitle: Single\ntags: notes\n---\n\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["notes"]);
    }

    #[test]
    fn test_author_and_cover_image() {
        let content = r#"---
title: Authored
coverImage: /images/cover.png
author:
  name: Jane Doe
  picture: /images/jane.png
---
Body.
"#;
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.cover_image, Some("/images/cover.png".to_string()));
        let author = fm.author.unwrap();
        assert_eq!(author.name, "Jane Doe");
        assert_eq!(author.picture, Some("/images/jane.png".to_string()));
    }

    #[test]
    fn test_slug_override() {
        let content = "---\nslug: custom-slug\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.slug, Some("custom-slug".to_string()));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a plain markdown file.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(fm.tags.is_empty());
        assert!(remaining.contains("plain markdown"));
    }

    #[test]
    fn test_empty_block() {
        let content = "---\n---\n\nBody only.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("Body only."));
    }

    #[test]
    fn test_unterminated_block_is_error() {
        let content = "---\ntitle: Broken\n\nNo closing fence.\n";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, FrontMatterError::UnterminatedBlock));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let content = "---\ntitle: [unclosed\n---\nBody.\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_json_frontmatter() {
        let content = "{\"title\": \"Test Post\", \"tags\": [\"a\", \"b\"]}\n\nThis is content.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Test Post".to_string()));
        assert_eq!(fm.tags, vec!["a", "b"]);
        assert!(remaining.contains("This is content."));
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let content = "---\ntitle: Extra\ndraft: true\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.extra.contains_key("draft"));
    }
}
