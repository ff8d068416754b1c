//! Slug derivation for categories and posts

/// Derive a URL slug from a display name.
///
/// Rules:
/// - ASCII-lowercased
/// - Runs of non-alphanumeric characters collapse to a single hyphen
/// - No leading or trailing hyphens
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
