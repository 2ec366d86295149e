use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use product_search::{AppConfig, Dependencies, RunOutcome};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::parse();

    if let Err(e) = run(config).await {
        eprintln!("\n✗ Error: {}", e);

        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {}", cause);
        }

        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<()> {
    let Dependencies { mut orchestrator } =
        Dependencies::new(config).context("Failed to initialize")?;

    match orchestrator.run().await.context("Product search run failed")? {
        RunOutcome::Completed(summary) => info!(
            uploaded = summary.uploaded,
            hits = summary.response.len(),
            "Done"
        ),
        RunOutcome::InputFileMissing => info!("Stopped early: input file not found"),
        RunOutcome::NoProducts => info!("Stopped early: no products to upload"),
    }

    Ok(())
}
