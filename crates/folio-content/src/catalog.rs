use folio_core::ReadingTime;
use serde::Serialize;

/// Listing entry for a published post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub reading_time: ReadingTime,
    pub description: &'static str,
}

/// Published posts, newest first. Drives the listing, the sitemap, and
/// title/date enrichment for file-backed posts.
pub static POSTS: &[PostMetadata] = &[
    PostMetadata {
        slug: "building-for-coolest-grandma",
        title: "Building for Coolest Grandma",
        date: "September 2025",
        reading_time: ReadingTime::Quick,
        description: "Design philosophy for intuitive yet elegant experiences",
    },
    PostMetadata {
        slug: "how-to-ship-production-features-in-24-hours-without-burning-out",
        title: "How to Ship Production Features in 24 Hours Without Burning Out",
        date: "September 2025",
        reading_time: ReadingTime::Quick,
        description: "A 24\u{2011}hour playbook that protects quality, safety, and sleep",
    },
    PostMetadata {
        slug: "stimulating-neuroplasticity-with-learning-clojure",
        title: "Stimulating Neuroplasticity with Learning Clojure",
        date: "September 2025",
        reading_time: ReadingTime::Moderate,
        description: "Why a Lisp changed how I think after a decade of TypeScript/C++",
    },
    PostMetadata {
        slug: "error-messages-part-of-ux",
        title: "Why Error Messages Are Part of UX (And How to Design Them)",
        date: "August 2025",
        reading_time: ReadingTime::Quick,
        description: "Design principles, patterns, and a checklist for helpful errors",
    },
    PostMetadata {
        slug: "why-fewer-parameters-safer-systems",
        title: "Why Fewer Parameters = Safer Systems",
        date: "August 2025",
        reading_time: ReadingTime::Quick,
        description: "Reducing knobs to cut risk, complexity, and blast radius",
    },
    PostMetadata {
        slug: "first-principles-thinking",
        title: "First Principles Thinking",
        date: "July 2025",
        reading_time: ReadingTime::Moderate,
        description: "A practical case study applying first principles to real constraints",
    },
    PostMetadata {
        slug: "designing-llm-workflows",
        title: "Designing LLM Workflows",
        date: "July 2025",
        reading_time: ReadingTime::Moderate,
        description: "Structured Pipelines vs. Autonomous Agents",
    },
    PostMetadata {
        slug: "self-evolving-structured-memory",
        title: "Self-Evolving Layered Structured Memory",
        date: "June 2025",
        reading_time: ReadingTime::Long,
        description: "Turning Chat Fragments into a Living Knowledge System",
    },
];

pub fn find_metadata(slug: &str) -> Option<&'static PostMetadata> {
    POSTS.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = POSTS.iter().map(|p| p.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), POSTS.len());
    }

    #[test]
    fn test_find_metadata() {
        let post = find_metadata("designing-llm-workflows").unwrap();
        assert_eq!(post.title, "Designing LLM Workflows");
        assert_eq!(post.reading_time, ReadingTime::Moderate);
        assert!(find_metadata("shipping-fast").is_none());
    }
}
