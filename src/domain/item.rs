use chrono::{DateTime, FixedOffset};

/// One entry of the feed, normalized by the parser. Immutable after
/// construction; every field is already defaulted so rendering never has
/// to handle a missing value.
#[derive(Debug, Clone)]
pub struct FeedItem {
    /// Item headline. Never empty: the parser substitutes `"Untitled"`.
    pub title: String,
    /// Link back to the original article. May be empty; carried through
    /// but not rendered on the generated pages.
    pub link: String,
    /// Raw markup body from the feed, used verbatim on the item page.
    /// May be empty, in which case the renderer shows a placeholder.
    pub description: String,
    /// Publication time with the offset the feed declared, so the
    /// calendar date used for filenames matches the feed's own timezone.
    pub published_at: DateTime<FixedOffset>,
}
