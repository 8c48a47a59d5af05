use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::parser;
use crate::render::{self, IndexEntry};
use crate::slug;
use crate::writer;

pub struct GenerateReport {
    /// Item pages written, not counting the index.
    pub pages_written: usize,
}

/// Run the whole pipeline once: fetch the feed, parse it, write one page
/// per item and the index.
pub async fn generate(ctx: &AppContext, config: &Config) -> Result<GenerateReport> {
    info!(url = %config.feed_url, "fetching feed");
    let body = ctx.fetcher.fetch(config.feed_url.as_str()).await?;

    // One timestamp for the whole run. Items whose pubDate fails to parse
    // are stamped with this instead of a fresh now() each, so a run is a
    // pure function of the feed bytes, the config and this instant.
    let generated_at = Utc::now().fixed_offset();
    let items = parser::parse_feed(&body, generated_at, config.max_items)?;
    info!(count = items.len(), "parsed feed items");

    let mut entries = Vec::with_capacity(items.len());
    let mut seen = HashSet::new();

    for item in &items {
        let slug = slug::slugify(&item.title);
        let filename = slug::page_filename(item.published_at.date_naive(), &slug);

        // Last write wins on colliding filenames; make the overwrite
        // visible in the logs instead of silent.
        if !seen.insert(filename.clone()) {
            warn!(%filename, "duplicate output filename, overwriting earlier page");
        }

        let page = render::item_page(item, &config.comments_snippet);
        writer::write_page(&config.out_dir.join(&filename), &page)?;

        entries.push(IndexEntry {
            published_at: item.published_at,
            title: item.title.clone(),
            filename,
        });
    }

    // Re-sorted after filename assignment; same key and direction as the
    // parser's ordering, so the index agrees with the generated file set.
    entries.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    let index = render::index_page(&entries);
    writer::write_page(&config.out_dir.join("index.html"), &index)?;

    info!(pages = entries.len(), out_dir = %config.out_dir.display(), "generation complete");
    Ok(GenerateReport {
        pages_written: entries.len(),
    })
}
