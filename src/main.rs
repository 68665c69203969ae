use anyhow::{Context, Result};

use otzyvy_scraper::config::Settings;
use otzyvy_scraper::logging::init_tracing;
use otzyvy_scraper::ReviewScraper;

const DEFAULT_SLUG: &str = "5121-mtt-otzyvy";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::new()?;
    let slug = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SLUG.to_string());

    let mut scraper = ReviewScraper::with_settings(slug.as_str(), &settings)?;
    scraper
        .start()
        .await
        .with_context(|| format!("failed to scrape {}", slug))?;

    for review in scraper.reviews() {
        tracing::debug!("{}", review);
    }

    let report = scraper
        .report()
        .context("scraper finished without a report")?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
