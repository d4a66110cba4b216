use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::catalog::PostMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Crawlable pages: home, resume, then one entry per catalog post
#[derive(Debug, Clone)]
pub struct Sitemap {
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    pub fn build(site_url: &str, posts: &[PostMetadata]) -> Self {
        let base = site_url.trim_end_matches('/');
        let mut entries = vec![
            SitemapEntry {
                loc: format!("{}/", base),
                change_frequency: ChangeFrequency::Weekly,
                priority: 1.0,
            },
            SitemapEntry {
                loc: format!("{}/resume", base),
                change_frequency: ChangeFrequency::Yearly,
                priority: 0.6,
            },
        ];
        entries.extend(posts.iter().map(|post| SitemapEntry {
            loc: format!("{}/blog/{}", base, post.slug),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.7,
        }));
        Self { entries }
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    /// Every entry carries `now` as its last-modified time
    pub fn to_xml(&self, now: DateTime<Utc>) -> String {
        let lastmod = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for entry in &self.entries {
            // Writing to a String cannot fail.
            let _ = write!(
                xml,
                "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
                escape_xml(&entry.loc),
                lastmod,
                entry.change_frequency.as_str(),
                entry.priority,
            );
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn robots_txt(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    format!(
        "User-Agent: *\nAllow: /\n\nHost: {base}\nSitemap: {base}/sitemap.xml\n",
        base = base
    )
}
