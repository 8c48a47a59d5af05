//! Run configuration.
//!
//! Settings are resolved once at startup into a [`Config`] value that is
//! passed into the pipeline; no component reads process environment state
//! on its own. Precedence, lowest to highest: optional TOML config file,
//! environment (`RSS_FEED`, `MAX_ITEMS`, `GISCUS_SNIPPET`), CLI flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::app::{NewsgenError, Result};
use crate::cli::Cli;

pub const DEFAULT_MAX_ITEMS: usize = 20;
pub const DEFAULT_OUT_DIR: &str = "docs/news";

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source feed location. Required.
    pub feed_url: Url,
    /// Cap on rendered items.
    pub max_items: usize,
    /// Markup injected verbatim into each page's comments section.
    /// Empty means the "not configured" placeholder is rendered.
    pub comments_snippet: String,
    /// Directory the generated pages are written into.
    pub out_dir: PathBuf,
}

/// Shape of the optional TOML config file. Every key is optional;
/// anything unset falls through to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    feed_url: Option<String>,
    max_items: Option<usize>,
    comments_snippet: Option<String>,
    out_dir: Option<PathBuf>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NewsgenError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            NewsgenError::Config(format!("failed to parse config file {}: {e}", path.display()))
        })
    }
}

impl Config {
    /// Resolve the configuration for this run. Fails before any network
    /// or output I/O when the feed URL is missing or invalid, or when a
    /// numeric setting does not parse.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::build(cli, file, |key| std::env::var(key).ok())
    }

    fn build(cli: &Cli, file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let feed_url = cli
            .feed_url
            .clone()
            .or_else(|| {
                env("RSS_FEED")
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
            })
            .or(file.feed_url)
            .ok_or_else(|| {
                NewsgenError::Config(
                    "feed URL is required (set RSS_FEED or pass --feed-url)".into(),
                )
            })?;
        let feed_url = Url::parse(&feed_url)?;

        let max_items = match cli.max_items {
            Some(n) => n,
            None => match env("MAX_ITEMS") {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    NewsgenError::Config(format!("MAX_ITEMS is not a number: {raw}"))
                })?,
                None => file.max_items.unwrap_or(DEFAULT_MAX_ITEMS),
            },
        };

        let comments_snippet = cli
            .comments_snippet
            .clone()
            .or_else(|| env("GISCUS_SNIPPET"))
            .or(file.comments_snippet)
            .unwrap_or_default()
            .trim()
            .to_string();

        let out_dir = cli
            .out_dir
            .clone()
            .or(file.out_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

        Ok(Self {
            feed_url,
            max_items,
            comments_snippet,
            out_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            config: None,
            feed_url: None,
            max_items: None,
            out_dir: None,
            comments_snippet: None,
        }
    }

    fn no_env(_key: &str) -> Option<String> {
        None
    }

    #[test]
    fn missing_feed_url_is_a_config_error() {
        let err = Config::build(&bare_cli(), FileConfig::default(), no_env).unwrap_err();
        assert!(matches!(err, NewsgenError::Config(_)));
    }

    #[test]
    fn env_feed_url_with_defaults() {
        let config = Config::build(&bare_cli(), FileConfig::default(), |key| match key {
            "RSS_FEED" => Some(" https://example.com/feed.xml ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.feed_url.as_str(), "https://example.com/feed.xml");
        assert_eq!(config.max_items, DEFAULT_MAX_ITEMS);
        assert_eq!(config.comments_snippet, "");
        assert_eq!(config.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
    }

    #[test]
    fn blank_env_feed_url_counts_as_unset() {
        let err = Config::build(&bare_cli(), FileConfig::default(), |key| match key {
            "RSS_FEED" => Some("   ".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, NewsgenError::Config(_)));
    }

    #[test]
    fn invalid_feed_url_fails_fast() {
        let err = Config::build(&bare_cli(), FileConfig::default(), |key| match key {
            "RSS_FEED" => Some("not a url".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, NewsgenError::InvalidUrl(_)));
    }

    #[test]
    fn non_numeric_max_items_is_fatal() {
        let err = Config::build(&bare_cli(), FileConfig::default(), |key| match key {
            "RSS_FEED" => Some("https://example.com/feed.xml".to_string()),
            "MAX_ITEMS" => Some("lots".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, NewsgenError::Config(_)));
    }

    #[test]
    fn cli_flags_override_env() {
        let cli = Cli {
            feed_url: Some("https://cli.example.com/feed.xml".to_string()),
            max_items: Some(5),
            ..bare_cli()
        };
        let config = Config::build(&cli, FileConfig::default(), |key| match key {
            "RSS_FEED" => Some("https://env.example.com/feed.xml".to_string()),
            "MAX_ITEMS" => Some("50".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.feed_url.as_str(), "https://cli.example.com/feed.xml");
        assert_eq!(config.max_items, 5);
    }

    #[test]
    fn env_overrides_file() {
        let file = FileConfig {
            feed_url: Some("https://file.example.com/feed.xml".to_string()),
            max_items: Some(3),
            ..FileConfig::default()
        };
        let config = Config::build(&bare_cli(), file, |key| match key {
            "RSS_FEED" => Some("https://env.example.com/feed.xml".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.feed_url.as_str(), "https://env.example.com/feed.xml");
        // File values still apply where the environment is silent.
        assert_eq!(config.max_items, 3);
    }

    #[test]
    fn file_config_parses() {
        let file: FileConfig = toml::from_str(
            r#"
feed_url = "https://example.com/feed.xml"
max_items = 10
out_dir = "public/news"
"#,
        )
        .unwrap();
        assert_eq!(file.max_items, Some(10));
        let config = Config::build(&bare_cli(), file, no_env).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("public/news"));
    }
}
