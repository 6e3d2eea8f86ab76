//! The public news feed.

use crate::models::NewsPost;

/// Filters and orders posts for public display: only `is_public` entries,
/// newest `publish_date` first.
pub fn public_news_feed(mut posts: Vec<NewsPost>) -> Vec<NewsPost> {
    posts.retain(|post| post.is_public);
    posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    posts
}

/// Finds one post for the detail view.
///
/// Non-public posts are invisible here too: a draft's id behaves exactly
/// like an id that does not exist.
pub fn find_public_post(posts: Vec<NewsPost>, id: i64) -> Option<NewsPost> {
    posts
        .into_iter()
        .find(|post| post.id == id && post.is_public)
}
