use serde::{Deserialize, Serialize};

/// Fixed descriptive label shown next to a post. Not a computed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingTime {
    #[serde(rename = "Quick to Read")]
    Quick,
    #[serde(rename = "Sometime to read")]
    Moderate,
    #[serde(rename = "Impossible to Read all")]
    Long,
}

impl ReadingTime {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingTime::Quick => "Quick to Read",
            ReadingTime::Moderate => "Sometime to read",
            ReadingTime::Long => "Impossible to Read all",
        }
    }
}

impl Default for ReadingTime {
    fn default() -> Self {
        Self::Quick
    }
}

impl std::fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved blog post, ready for the page layer to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    /// Display string, e.g. "September 2025"
    pub date: String,
    pub reading_time: ReadingTime,
    /// Markdown, or pre-rendered HTML when `is_markdown` is false
    pub content: String,
    pub is_markdown: bool,
}
