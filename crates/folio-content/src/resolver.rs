use std::path::PathBuf;

use chrono::Local;
use folio_core::{BlogPost, ReadingTime};

use crate::catalog::find_metadata;
use crate::fallback::fallback_post;
use crate::slug::{derive_title, is_valid_slug};
use crate::storage::PostStorage;
use crate::{ContentError, ContentResult};

/// One place a post may live
#[derive(Debug, Clone)]
pub enum PostSource {
    /// `<dir>/<slug>.md`, enriched from the catalog
    File(PostStorage),
    /// Posts compiled into the binary
    Fallback,
}

impl PostSource {
    async fn lookup(&self, slug: &str) -> Option<BlogPost> {
        match self {
            PostSource::File(storage) => match storage.load_markdown(slug).await {
                Ok(content) => Some(enrich(slug, content)),
                Err(ContentError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    tracing::warn!(slug, "Failed to read post file: {}", e);
                    None
                }
            },
            PostSource::Fallback => fallback_post(slug),
        }
    }
}

fn enrich(slug: &str, content: String) -> BlogPost {
    match find_metadata(slug) {
        Some(meta) => BlogPost {
            title: meta.title.to_string(),
            date: meta.date.to_string(),
            reading_time: meta.reading_time,
            content,
            is_markdown: true,
        },
        None => BlogPost {
            title: derive_title(slug),
            date: Local::now().format("%B %Y").to_string(),
            reading_time: ReadingTime::default(),
            content,
            is_markdown: true,
        },
    }
}

/// Resolves a slug by trying each source in order. Nothing is cached.
#[derive(Debug, Clone)]
pub struct PostResolver {
    sources: Vec<PostSource>,
}

impl PostResolver {
    /// Files under `posts_dir` first, then the compiled-in posts
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self::with_sources(vec![
            PostSource::File(PostStorage::new(posts_dir)),
            PostSource::Fallback,
        ])
    }

    pub fn with_sources(sources: Vec<PostSource>) -> Self {
        Self { sources }
    }

    pub async fn resolve(&self, slug: &str) -> ContentResult<BlogPost> {
        if !is_valid_slug(slug) {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        for source in &self.sources {
            if let Some(post) = source.lookup(slug).await {
                return Ok(post);
            }
        }

        Err(ContentError::NotFound(slug.to_string()))
    }
}
