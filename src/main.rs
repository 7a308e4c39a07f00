//! Scrape hotel listings for a set of cities into one CSV file.
//!
//! Run the binary to scrape the configured cities.
//! Run with `--write-config` to persist the effective settings.

mod app;
mod config;
mod core;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::app::fetch::HttpSource;
use crate::app::pipeline::{scrape_cities, CityOutcome};
use crate::config::AppConfig;
use crate::core::{city::City, listing::ListingParser, output};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Hotel listing scraper")]
struct Cli {
    /// CSV file to write (overrides the config file).
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// City to scrape as `Name:dest_id`; repeat for several.
    /// Replaces the configured list.
    #[arg(long = "city", value_name = "NAME:DEST_ID", value_parser = parse_city)]
    cities: Vec<City>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Seed for the placeholder generator (reproducible output).
    #[arg(long)]
    seed: Option<u64>,

    /// Save the effective configuration and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

fn parse_city(s: &str) -> Result<City, String> {
    City::parse(s).ok_or_else(|| format!("expected NAME:DEST_ID, got `{s}`"))
}

impl Cli {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(output) = self.output {
            config.output = output;
        }
        if !self.cities.is_empty() {
            config.cities = self.cities;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout.clamp(1, 300);
        }
        config
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Progress goes to stderr; `RUST_LOG` overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed;
    let write_config = cli.write_config;
    let config = cli.apply(AppConfig::load());

    if write_config {
        let path = config.save()?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let source = HttpSource::new(&config.user_agent, config.timeout())?;
    let parser = ListingParser::new()?;
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let report = scrape_cities(&source, &parser, &config.cities, &mut rng, &today).await?;

    for (city, outcome) in &report.outcomes {
        match outcome {
            CityOutcome::Scraped(n) => tracing::debug!(%city, hotels = n, "city done"),
            CityOutcome::Failed(reason) => tracing::debug!(%city, %reason, "city skipped"),
        }
    }
    let skipped: Vec<&str> = report.failed_cities().collect();
    if !skipped.is_empty() {
        tracing::warn!("Skipped {} cities: {}", skipped.len(), skipped.join(", "));
    }

    if !output::write_report(&config.output, &report.records)? {
        tracing::info!("No hotel data was extracted from any city.");
        return Ok(());
    }
    tracing::info!(
        "All hotel data successfully extracted and saved to '{}'",
        config.output.display()
    );
    tracing::info!("Total number of hotels extracted: {}", report.records.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from([
            "hotel-scraper",
            "--output",
            "x.csv",
            "--city",
            "Paris:-1456928",
            "--city",
            "Rome:-126693",
        ]);
        let config = cli.apply(AppConfig::default());
        assert_eq!(config.output, PathBuf::from("x.csv"));
        assert_eq!(
            config.cities,
            vec![City::new("Paris", "-1456928"), City::new("Rome", "-126693")]
        );
    }

    #[test]
    fn timeout_flag_clamped_like_config_file() {
        let timeout = |arg: &str| {
            let cli = Cli::parse_from(["hotel-scraper", "--timeout", arg]);
            cli.apply(AppConfig::default()).timeout_secs
        };
        assert_eq!(timeout("0"), 1);
        assert_eq!(timeout("45"), 45);
        assert_eq!(timeout("3600"), 300);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["hotel-scraper"]);
        assert_eq!(cli.apply(AppConfig::default()), AppConfig::default());
    }

    #[test]
    fn malformed_city_is_rejected() {
        assert!(Cli::try_parse_from(["hotel-scraper", "--city", "Paris"]).is_err());
    }
}
