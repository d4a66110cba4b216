use std::path::PathBuf;

use tokio::fs;

use crate::ContentResult;

/// Markdown posts on disk, one `<slug>.md` per post
#[derive(Debug, Clone)]
pub struct PostStorage {
    root: PathBuf,
}

impl PostStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for_slug(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}.md", slug))
    }

    /// Read the post body. Callers must validate the slug first.
    pub async fn load_markdown(&self, slug: &str) -> ContentResult<String> {
        let content = fs::read_to_string(self.path_for_slug(slug)).await?;
        Ok(content)
    }
}
