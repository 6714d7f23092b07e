/// Derive a URL-safe identifier from a display name.
///
/// The name is lowercased, every maximal run of characters outside `[a-z0-9]`
/// becomes a single hyphen, and a leading or trailing hyphen is stripped.
/// A name without any ASCII alphanumerics yields an empty slug.
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
