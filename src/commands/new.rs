//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Create `posts/<slug>.md` (or `.mdx`) with a front-matter scaffold
pub fn run(blog: &Blog, title: &str, mdx: bool) -> Result<()> {
    if mdx && !blog.config.features.mdx {
        anyhow::bail!("MDX support is disabled in the configuration");
    }

    let slug = slug::slugify(title);
    let ext = if mdx { "mdx" } else { "md" };
    let file_path = blog.posts_dir.join(format!("{}.{}", slug, ext));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(&blog.posts_dir)?;

    let now = chrono::Local::now();
    let content = format!(
        "---\ntitle: \"{}\"\ndate: \"{}\"\ntags: []\n---\n\n",
        title.replace('"', "\\\""),
        now.format("%Y-%m-%d")
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
