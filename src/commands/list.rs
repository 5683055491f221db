//! List posts and tags

use anyhow::Result;

use crate::helpers::date;
use crate::Blog;

/// List blog content by type
pub async fn run(blog: &Blog, content_type: &str, page: Option<usize>, tag: Option<&str>) -> Result<()> {
    let repo = blog.repository();

    match content_type {
        "post" | "posts" => {
            let posts = match tag {
                Some(tag) => repo.posts_by_tag(tag).await,
                None => repo.list_posts().await,
            };
            let slice = repo.paginate(&posts, page.unwrap_or(1));

            println!("Posts ({} of {}):", slice.posts.len(), slice.total_posts);
            for post in &slice.posts {
                let shown_date = post
                    .parsed_date()
                    .map(|d| date::format_date(&d, &blog.config.date_format))
                    .unwrap_or_else(|| post.date.clone());
                let reading = if post.reading_time.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", post.reading_time)
                };
                println!("  {} - {} [{}]{}", shown_date, post.title, post.slug, reading);
            }
            if slice.total_pages > 1 {
                println!("Page {}/{}", slice.current, slice.total_pages);
            }
        }

        "tag" | "tags" => {
            let posts = repo.list_posts().await;
            let tags = repo.all_tags().await;
            println!("Tags ({}):", tags.len());
            for tag in tags {
                let count = posts.iter().filter(|p| p.has_tag(&tag)).count();
                println!("  {} ({})", tag, count);
            }
        }

        _ => {
            anyhow::bail!("Unknown type: {}. Available: posts, tags", content_type);
        }
    }

    Ok(())
}
