use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsgen::app::AppContext;
use newsgen::cli::{commands, Cli};
use newsgen::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;
    let ctx = AppContext::new();

    let report = commands::generate(&ctx, &config).await?;
    println!(
        "Generated {} pages in {}",
        report.pages_written,
        config.out_dir.display()
    );

    Ok(())
}
