//! Content module - post loading and metadata derivation

mod frontmatter;
mod markdown;
mod post;
pub mod repository;
pub mod transform;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use markdown::MarkdownRenderer;
pub use post::{Author, Post};
pub use repository::{Listing, PostPage, PostRepository, SkippedFile};
