//! HTML page assembly.
//!
//! Pages are built with `format!` against fixed templates; dynamic text is
//! escaped with `html-escape`. The one exception is the item body, which
//! arrives wrapped in [`RawHtml`] and is spliced in verbatim.

use chrono::{DateTime, FixedOffset};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::FeedItem;

/// Markup that is trusted as-is and rendered without escaping.
///
/// Feed descriptions are usually HTML inside CDATA; the feed is treated as
/// a trusted source, so its markup passes through unsanitized. Wrapping the
/// string makes that trust boundary explicit at the call site.
#[derive(Debug, Clone, Copy)]
pub struct RawHtml<'a>(pub &'a str);

/// Body shown when an item has no description at all.
pub const EMPTY_BODY_PLACEHOLDER: &str = "<p>(No description provided)</p>";

const COMMENTS_PLACEHOLDER: &str = "<p><em>(Comments not configured yet)</em></p>";

/// Human-readable date used on pages and in the index: `01 Mar 2024`.
pub fn human_date(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%d %b %Y").to_string()
}

/// Render the standalone page for one item. The nav prefix is `"../"`
/// because item pages live one level below the site root.
pub fn item_page(item: &FeedItem, comments_snippet: &str) -> String {
    let body = if item.description.is_empty() {
        RawHtml(EMPTY_BODY_PLACEHOLDER)
    } else {
        RawHtml(&item.description)
    };

    page(
        &item.title,
        &human_date(&item.published_at),
        body,
        "../",
        comments_snippet,
    )
}

fn page(
    title: &str,
    published: &str,
    body: RawHtml<'_>,
    nav_prefix: &str,
    comments_snippet: &str,
) -> String {
    let comments_block = if comments_snippet.is_empty() {
        COMMENTS_PLACEHOLDER.to_string()
    } else {
        format!(
            "<h2>Comments</h2>\n<div class=\"giscus\"></div>\n{}",
            comments_snippet
        )
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <style>
    body {{ font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; line-height: 1.5; margin: 0; }}
    header, main, footer {{ max-width: 900px; margin: 0 auto; padding: 18px; }}
    nav a {{ margin-right: 12px; }}
    article {{ border: 1px solid #ddd; border-radius: 10px; padding: 14px; }}
    .muted {{ color: #555; }}
    hr {{ border: 0; border-top: 1px solid #eee; margin: 18px 0; }}
  </style>
</head>
<body>
  <header>
    <nav>
      <a href="{nav_prefix}">Home</a>
      <a href="{nav_prefix}news/">News</a>
      <a href="{nav_prefix}policies/">Policies</a>
    </nav>
  </header>

  <main>
    <article>
      <h1>{title}</h1>
      <p class="muted"><em>Published: {published}</em></p>
      <hr />
      {body}
    </article>

    <hr />
    {comments_block}
  </main>

  <footer class="muted">
    <hr />
    <p>Not affiliated with the school. Parent/community initiative focused on improving communication.</p>
  </footer>
</body>
</html>
"#,
        title = encode_text(title),
        published = encode_text(published),
        nav_prefix = nav_prefix,
        body = body.0,
        comments_block = comments_block,
    )
}

/// One line of the index listing.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub published_at: DateTime<FixedOffset>,
    pub title: String,
    pub filename: String,
}

/// Render the index document from entries already sorted newest first.
pub fn index_page(entries: &[IndexEntry]) -> String {
    let list_items: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                r#"<li><a href="./{href}">{title}</a> <span class="muted">({date})</span></li>"#,
                href = encode_double_quoted_attribute(&entry.filename),
                title = encode_text(&entry.title),
                date = human_date(&entry.published_at),
            )
        })
        .collect();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>News</title>
  <style>
    body {{ font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; line-height: 1.5; margin: 0; }}
    header, main {{ max-width: 900px; margin: 0 auto; padding: 18px; }}
    nav a {{ margin-right: 12px; }}
    .muted {{ color: #555; }}
  </style>
</head>
<body>
  <header>
    <nav>
      <a href="../">Home</a>
      <a href="./">News</a>
      <a href="../policies/">Policies</a>
    </nav>
    <h1>News</h1>
    <p class="muted">Auto-generated from the configured RSS feed.</p>
  </header>
  <main>
    <ul>
      {list_items}
    </ul>
  </main>
</body>
</html>
"#,
        list_items = list_items.join("\n"),
    )
}
