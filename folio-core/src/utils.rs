/// Lowercase, hyphen-separated slug for URLs and heading anchors
pub fn slugify(s: &str) -> String {
    let slug = slug::slugify(s);
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Reading time in whole minutes at 200 words per minute, at least 1
pub fn reading_minutes(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(200).max(1)
}
