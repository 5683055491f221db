//! Post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::helpers::date;

/// Post author, as declared in front matter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name
    pub name: String,

    /// Avatar or portrait image path
    pub picture: Option<String>,
}

/// A blog post assembled from one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Lookup key and URL path segment, from the filename or a
    /// front-matter override
    pub slug: String,

    /// Post title; falls back to the slug
    pub title: String,

    /// ISO-like date string; the file's last-modified date when front
    /// matter has none
    pub date: String,

    /// Raw markdown body in listings, rendered HTML after a slug lookup
    pub content: String,

    /// Whether the source file uses the extended-markdown extension
    pub is_mdx: bool,

    /// Author-supplied or derived plain-text summary
    pub excerpt: String,

    /// Tag labels in declaration order
    pub tags: Vec<String>,

    /// Human-readable estimate such as "3 min read"; empty when the
    /// feature is disabled
    pub reading_time: String,

    /// Cover image path
    pub cover_image: Option<String>,

    /// Author metadata
    pub author: Option<Author>,

    /// URL path under the configured base path
    pub path: String,
}

impl Post {
    /// The parsed publication date, used as the sort key. `None` when the
    /// date string matches no accepted format.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        date::parse_date_string(&self.date)
    }

    /// Whether this post carries `tag` (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(date: &str, tags: &[&str]) -> Post {
        Post {
            slug: "sample".to_string(),
            title: "Sample".to_string(),
            date: date.to_string(),
            content: String::new(),
            is_mdx: false,
            excerpt: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            reading_time: String::new(),
            cover_image: None,
            author: None,
            path: "/blog/sample".to_string(),
        }
    }

    #[test]
    fn test_parsed_date() {
        let post = sample_post("2025-03-03", &[]);
        let parsed = post.parsed_date().unwrap();
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2025-03-03");

        let bad = sample_post("someday", &[]);
        assert!(bad.parsed_date().is_none());
    }

    #[test]
    fn test_has_tag_is_exact() {
        let post = sample_post("2025-01-01", &["rust", "Blog"]);
        assert!(post.has_tag("rust"));
        assert!(!post.has_tag("Rust"));
        assert!(!post.has_tag("blog"));
    }
}
