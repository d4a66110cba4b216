/// URL-safe slug: ASCII letters, digits, `-` and `_`, at least one character.
/// Anything else never reaches the file system.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Title for a post missing from the catalog: "first-principles" becomes
/// "First Principles"
pub fn derive_title(slug: &str) -> String {
    slug.split(|c| c == '-' || c == '_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
