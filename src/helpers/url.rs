//! URL path helpers

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::BlogConfig;
use crate::content::Post;

/// Join a path under the configured base path
///
/// # Examples
/// ```ignore
/// url_for(&config, "hello-world") // -> "/blog/hello-world"
/// ```
pub fn url_for(config: &BlogConfig, path: &str) -> String {
    let base = config.base_path.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// URL path for a single post
pub fn post_path(config: &BlogConfig, slug: &str) -> String {
    url_for(config, slug)
}

/// URL path for a tag listing, with the tag percent-encoded
pub fn tag_path(config: &BlogConfig, tag: &str) -> String {
    let encoded = utf8_percent_encode(tag, NON_ALPHANUMERIC).to_string();
    url_for(config, &format!("tags/{}", encoded))
}

/// Social share links for a post as `(network, url)` pairs; empty when
/// the sharing feature is off
pub fn share_links(config: &BlogConfig, post: &Post) -> Vec<(String, String)> {
    if !config.features.social_sharing {
        return Vec::new();
    }

    let url = utf8_percent_encode(&post.path, NON_ALPHANUMERIC).to_string();
    let title = utf8_percent_encode(&post.title, NON_ALPHANUMERIC).to_string();

    vec![
        (
            "twitter".to_string(),
            format!("https://twitter.com/intent/tweet?url={}&text={}", url, title),
        ),
        (
            "facebook".to_string(),
            format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        ),
        (
            "linkedin".to_string(),
            format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
        ),
    ]
}
