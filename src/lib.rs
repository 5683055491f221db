//! mdblog: a markdown blog content pipeline
//!
//! This crate loads a directory of Markdown/MDX posts, derives their
//! metadata (title, date, tags, excerpt, reading time) and exposes
//! listing, lookup, tag filtering and pagination over the result.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A resolved blog: configuration plus source directories.
///
/// Constructed once at the call boundary and threaded by reference into
/// every repository operation, so nothing reads configuration from
/// process-wide state.
#[derive(Clone)]
pub struct Blog {
    /// Resolved configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory containing post sources
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Resolve a blog rooted at `base_dir`, reading `blog.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::BlogConfig::load_or_default(&base_dir)?;
        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Repository over this blog's posts directory
    pub fn repository(&self) -> content::PostRepository<'_> {
        content::PostRepository::new(self)
    }
}
