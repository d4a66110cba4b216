use folio_core::{BlogPost, ReadingTime};

struct InlinePost {
    slug: &'static str,
    title: &'static str,
    date: &'static str,
    reading_time: ReadingTime,
    content: &'static str,
}

static INLINE_POSTS: &[InlinePost] = &[
    InlinePost {
        slug: "building-future-with-ai",
        title: "Building the Future with AI",
        date: "December 2024",
        reading_time: ReadingTime::Quick,
        content: include_str!("../posts/building-future-with-ai.md"),
    },
    InlinePost {
        slug: "art-of-product-engineering",
        title: "The Art of Product Engineering",
        date: "November 2024",
        reading_time: ReadingTime::Moderate,
        content: include_str!("../posts/art-of-product-engineering.md"),
    },
    InlinePost {
        slug: "defending-earth-llm-security",
        title: "Defending Earth: A Technical Analysis of LLM Security",
        date: "October 2024",
        reading_time: ReadingTime::Long,
        content: include_str!("../posts/defending-earth-llm-security.md"),
    },
    InlinePost {
        slug: "idea-to-product-48-hours",
        title: "From Idea to Product in 48 Hours",
        date: "September 2024",
        reading_time: ReadingTime::Quick,
        content: include_str!("../posts/idea-to-product-48-hours.md"),
    },
    InlinePost {
        slug: "philosophy-clean-code",
        title: "The Philosophy of Clean Code",
        date: "August 2024",
        reading_time: ReadingTime::Moderate,
        content: include_str!("../posts/philosophy-clean-code.md"),
    },
];

/// Post compiled into the binary, used when no file exists for the slug
pub fn fallback_post(slug: &str) -> Option<BlogPost> {
    INLINE_POSTS
        .iter()
        .find(|post| post.slug == slug)
        .map(|post| BlogPost {
            title: post.title.to_string(),
            date: post.date.to_string(),
            reading_time: post.reading_time,
            content: post.content.trim().to_string(),
            is_markdown: true,
        })
}
