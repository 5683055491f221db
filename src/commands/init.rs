//! Initialize a new blog directory

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# mdblog configuration

# Directory where posts are stored
postsDir: posts

# URL prefix the blog is served under
basePath: /blog

# Number of posts per page
postsPerPage: 10

# Reading speed (words per minute) for reading-time estimates
wordsPerMinute: 200

# Maximum length of derived excerpts
excerptLength: 150

# Date display format
dateFormat: YYYY-MM-DD

features:
  tags: true
  readingTime: true
  mdx: true
  socialSharing: true
"#;

const SAMPLE_POST: &str = r#"---
title: "Hello World"
date: "2025-01-01"
tags:
  - general
---

# Hello World

Welcome to your new blog. Edit or delete this post and start writing.
"#;

/// Scaffold a blog in `target_dir`: config file, posts directory and a
/// sample post. Existing files are left untouched.
pub fn run(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("posts"))?;

    let config_path = target_dir.join("blog.yml");
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    let sample_path = target_dir.join("posts").join("hello-world.md");
    if !sample_path.exists() {
        fs::write(&sample_path, SAMPLE_POST)?;
    }

    Ok(())
}
