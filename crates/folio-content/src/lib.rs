//! Content served next to the chat relay: blog posts, the resume document,
//! and crawler metadata derived from the post catalog.

mod catalog;
mod error;
mod fallback;
mod resolver;
mod resume;
mod sitemap;
mod slug;
mod storage;

pub use catalog::{find_metadata, PostMetadata, POSTS};
pub use error::{ContentError, ContentResult};
pub use fallback::fallback_post;
pub use resolver::{PostResolver, PostSource};
pub use resume::{ResumeFile, ResumeStore};
pub use sitemap::{robots_txt, ChangeFrequency, Sitemap, SitemapEntry};
pub use slug::{derive_title, is_valid_slug};
pub use storage::PostStorage;
