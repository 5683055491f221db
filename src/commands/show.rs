//! Print a single post

use anyhow::Result;

use crate::helpers::url;
use crate::Blog;

/// Print a post's metadata and rendered HTML
pub async fn run(blog: &Blog, slug: &str, meta_only: bool) -> Result<()> {
    let repo = blog.repository();

    let Some(post) = repo.get_post_by_slug(slug).await else {
        anyhow::bail!("Post not found: {}", slug);
    };

    println!("Title: {}", post.title);
    println!("Date: {}", post.date);
    println!("Path: {}", post.path);
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", "));
    }
    if !post.reading_time.is_empty() {
        println!("Reading time: {}", post.reading_time);
    }
    if let Some(author) = &post.author {
        println!("Author: {}", author.name);
    }
    for (network, link) in url::share_links(&blog.config, &post) {
        println!("Share ({}): {}", network, link);
    }

    if !meta_only {
        println!();
        println!("{}", post.content);
    }

    Ok(())
}
