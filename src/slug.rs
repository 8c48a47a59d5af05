//! Filename derivation for generated pages.

use chrono::NaiveDate;

/// Slug substituted when a title has no usable characters at all.
const FALLBACK_SLUG: &str = "item";

/// Derive a URL/filesystem-safe slug from a title.
///
/// Lowercases, drops everything that is not alphanumeric, underscore,
/// whitespace or hyphen, then collapses runs of whitespace/underscore/
/// hyphen into a single hyphen. Idempotent: slugifying a slug returns it
/// unchanged.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        } else if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
        // Anything else (punctuation, symbols) is dropped outright and
        // does not act as a separator, matching `[^\w\s-]` removal.
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Output filename for an item: `YYYY-MM-DD-<slug>.html`.
pub fn page_filename(date: NaiveDate, slug: &str) -> String {
    format!("{}-{}.html", date.format("%Y-%m-%d"), slug)
}
