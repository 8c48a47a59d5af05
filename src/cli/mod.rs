pub mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "newsgen")]
#[command(about = "Generate static news pages from an RSS feed", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Feed URL (overrides the RSS_FEED environment variable)
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Maximum number of items to render (overrides MAX_ITEMS)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Output directory for the generated pages
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Comments markup injected into each page (overrides GISCUS_SNIPPET)
    #[arg(long)]
    pub comments_snippet: Option<String>,
}
