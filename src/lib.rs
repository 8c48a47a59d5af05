//! # Newsgen
//!
//! A one-shot generator that turns an RSS feed into a directory of static
//! news pages plus an index.
//!
//! ## Architecture
//!
//! The pipeline is a straight line:
//!
//! ```text
//! Fetcher → Parser → (Slug + Renderer) → Writer
//! ```
//!
//! - [`fetcher`]: HTTP client that retrieves the raw feed text
//! - [`parser`]: fixed-schema RSS parsing into [`FeedItem`](domain::FeedItem)s
//! - [`slug`]: title → filesystem-safe filename derivation
//! - [`render`]: HTML page and index assembly
//! - [`writer`]: persistence into the output directory
//!
//! Every run is a full regeneration: nothing is read back from the output
//! directory, files are overwritten in place, and pages that fell out of
//! the item window are left behind untouched.
//!
//! ## Quick start
//!
//! ```bash
//! RSS_FEED=https://example.com/feed.xml newsgen --out-dir docs/news
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) carries the fetcher; [`app::error`]
/// defines the crate-wide error enum and `Result` alias.
pub mod app;

/// Command-line interface using clap, plus the `generate` pipeline
/// entry point in [`cli::commands`].
pub mod cli;

/// Configuration resolution: config file, environment, CLI flags, in
/// that precedence order, collapsed into one [`Config`](config::Config).
pub mod config;

/// Core domain model: the immutable [`FeedItem`](domain::FeedItem).
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait so tests can stub the network
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Fixed-schema RSS parsing with quick-xml.
pub mod parser;

/// HTML rendering for item pages and the index document.
pub mod render;

/// Slug and output-filename derivation.
pub mod slug;

/// File output.
pub mod writer;
