//! Post repository - builds the in-memory listing from the posts directory
//!
//! Every operation re-reads the directory, so each call is a fresh
//! snapshot of the files on disk. One bad file never aborts a listing:
//! it is logged, reported through the diagnostics side-channel, and the
//! rest of the listing continues.

use anyhow::Result;
use chrono::{DateTime, Local};
use indexmap::IndexSet;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::markdown::render_error_html;
use super::{FrontMatter, MarkdownRenderer, Post};
use crate::content::transform;
use crate::helpers::url;
use crate::Blog;

/// Why a source file was left out of a listing
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// A listing together with its skipped-file diagnostics
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub posts: Vec<Post>,
    pub skipped: Vec<SkippedFile>,
}

/// One pagination slice of a listing
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    /// Current page number (1-based)
    pub current: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub per_page: usize,
}

impl PostPage {
    pub fn prev(&self) -> Option<usize> {
        (self.current > 1).then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.current < self.total_pages).then(|| self.current + 1)
    }
}

/// Reads posts from the configured directory and derives their metadata
pub struct PostRepository<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> PostRepository<'a> {
    /// Create a repository over a blog's posts directory
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::new(&blog.config.syntax_theme);
        Self { blog, renderer }
    }

    /// List every post, newest first.
    ///
    /// An unreadable directory yields an empty listing; a file that fails
    /// to parse is skipped. Neither aborts the call.
    pub async fn list_posts(&self) -> Vec<Post> {
        self.list_posts_with_diagnostics().await.posts
    }

    /// Same listing, plus which files were skipped and why
    pub async fn list_posts_with_diagnostics(&self) -> Listing {
        let posts_dir = &self.blog.posts_dir;
        let mut dir = match fs::read_dir(posts_dir).await {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!("Cannot read posts directory {:?}: {}", posts_dir, e);
                return Listing::default();
            }
        };

        let mut listing = Listing::default();

        loop {
            let entry = match dir.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Error listing {:?}: {}", posts_dir, e);
                    break;
                }
            };

            let path = entry.path();
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let Some(is_mdx) = self.source_kind(&path) else {
                continue;
            };

            match self.build_post(&path, is_mdx, false).await {
                Ok(post) => listing.posts.push(post),
                Err(e) => {
                    tracing::warn!("Skipping post {:?}: {}", path, e);
                    listing.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Newest first; posts whose date parses with no format sort last
        listing
            .posts
            .sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
                (Some(da), Some(db)) => db.cmp(&da),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });

        listing
    }

    /// Look up a single post by slug, rendering its body to HTML.
    ///
    /// `{slug}.md` is tried first, then `{slug}.mdx` when the feature is
    /// on. Every failure mode past this boundary collapses into `None`.
    pub async fn get_post_by_slug(&self, slug: &str) -> Option<Post> {
        let md_path = self.blog.posts_dir.join(format!("{}.md", slug));

        let (path, is_mdx) = if fs::try_exists(&md_path).await.unwrap_or(false) {
            (md_path, false)
        } else if self.blog.config.features.mdx {
            let mdx_path = self.blog.posts_dir.join(format!("{}.mdx", slug));
            if fs::try_exists(&mdx_path).await.unwrap_or(false) {
                (mdx_path, true)
            } else {
                return None;
            }
        } else {
            return None;
        };

        match self.build_post(&path, is_mdx, true).await {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!("Failed to load post {:?}: {}", path, e);
                None
            }
        }
    }

    /// Posts carrying `tag`, newest first. Exact, case-sensitive match;
    /// empty when the tag feature is off.
    pub async fn posts_by_tag(&self, tag: &str) -> Vec<Post> {
        if !self.blog.config.features.tags {
            return Vec::new();
        }

        let mut posts = self.list_posts().await;
        posts.retain(|p| p.has_tag(tag));
        posts
    }

    /// Unique tags across all posts, in first-seen order of the
    /// date-descending listing
    pub async fn all_tags(&self) -> Vec<String> {
        if !self.blog.config.features.tags {
            return Vec::new();
        }

        let mut tags: IndexSet<String> = IndexSet::new();
        for post in self.list_posts().await {
            tags.extend(post.tags);
        }
        tags.into_iter().collect()
    }

    /// Slice a listing into its `page`-th pagination window (1-based).
    /// Out-of-range pages clamp to the nearest valid page.
    pub fn paginate(&self, posts: &[Post], page: usize) -> PostPage {
        let per_page = self.blog.config.posts_per_page.max(1);
        let total_posts = posts.len();
        let total_pages = total_posts.div_ceil(per_page);
        let current = page.clamp(1, total_pages.max(1));

        let start = (current - 1) * per_page;
        let end = (start + per_page).min(total_posts);
        let window = if start < total_posts {
            posts[start..end].to_vec()
        } else {
            Vec::new()
        };

        PostPage {
            posts: window,
            current,
            total_pages,
            total_posts,
            per_page,
        }
    }

    /// Whether `path` is a post source. `Some(is_mdx)` for accepted
    /// extensions, honoring the MDX feature toggle.
    fn source_kind(&self, path: &Path) -> Option<bool> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") => Some(false),
            Some("mdx") if self.blog.config.features.mdx => Some(true),
            _ => None,
        }
    }

    /// Parse one source file into a Post. The body stays raw markdown in
    /// listings; slug lookups render it to HTML.
    async fn build_post(&self, path: &Path, is_mdx: bool, render: bool) -> Result<Post> {
        let raw = fs::read_to_string(path).await?;
        let (fm, body) = FrontMatter::parse(&raw)?;
        let config = &self.blog.config;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
        let slug = fm.slug.unwrap_or(stem);
        let title = fm.title.unwrap_or_else(|| slug.clone());

        let date = match fm.date {
            Some(date) => date,
            None => self.file_mtime_date(path).await,
        };

        let tags = if config.features.tags {
            fm.tags
        } else {
            Vec::new()
        };

        let excerpt = fm
            .excerpt
            .unwrap_or_else(|| transform::generate_excerpt(body, config.excerpt_length));
        let reading_time = transform::reading_time(config, body);

        let content = if render {
            self.renderer.render(body).unwrap_or_else(|e| {
                tracing::warn!("Error rendering {:?}: {}", path, e);
                render_error_html(&e)
            })
        } else {
            body.to_string()
        };

        let path_url = url::post_path(config, &slug);

        Ok(Post {
            slug,
            title,
            date,
            content,
            is_mdx,
            excerpt,
            tags,
            reading_time,
            cover_image: fm.cover_image,
            author: fm.author,
            path: path_url,
        })
    }

    /// Fallback date for posts without one in front matter: the file's
    /// last-modified date, or today when even that is unreadable
    async fn file_mtime_date(&self, path: &Path) -> String {
        let mtime = match fs::metadata(path).await {
            Ok(meta) => meta.modified().ok(),
            Err(_) => None,
        };
        let date = mtime
            .map(DateTime::<Local>::from)
            .unwrap_or_else(Local::now);
        date.format("%Y-%m-%d").to_string()
    }
}
