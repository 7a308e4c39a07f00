//! The scrape loop: fetch → parse → build records, one city at a time.

use rand::Rng;

use super::fetch::PageSource;
use crate::core::city::City;
use crate::core::listing::ListingParser;
use crate::core::record::HotelRecord;

/// What happened for a single city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityOutcome {
    /// Page fetched; this many hotels were extracted (possibly zero).
    Scraped(usize),
    /// Page could not be fetched; the city was skipped.
    Failed(String),
}

/// Everything collected over one run.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Records in city order, then page order.
    pub records: Vec<HotelRecord>,
    pub outcomes: Vec<(String, CityOutcome)>,
}

impl ScrapeReport {
    pub fn failed_cities(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, CityOutcome::Failed(_)))
            .map(|(name, _)| name.as_str())
    }
}

/// Scrape every city in order.  A city whose page cannot be fetched is
/// logged and skipped; the rest of the run carries on.
pub async fn scrape_cities<S, R>(
    source: &S,
    parser: &ListingParser,
    cities: &[City],
    rng: &mut R,
    date: &str,
) -> anyhow::Result<ScrapeReport>
where
    S: PageSource,
    R: Rng + ?Sized,
{
    let mut report = ScrapeReport::default();

    for city in cities {
        let url = city.search_url()?;
        tracing::info!("Scraping hotels for {} from {}", city.name, url);

        let html = match source.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("{e}");
                report
                    .outcomes
                    .push((city.name.clone(), CityOutcome::Failed(e.to_string())));
                continue;
            }
        };

        let listings = parser.parse_page(&html);
        let count = listings.len();
        for listing in listings {
            tracing::debug!(city = %city.name, ?listing, "parsed card");
            report
                .records
                .push(HotelRecord::build(listing, city, date, rng));
        }

        if count > 0 {
            tracing::info!("Extracted {} hotels for {}.", count, city.name);
        } else {
            tracing::info!("No hotels found for {}.", city.name);
        }
        report
            .outcomes
            .push((city.name.clone(), CityOutcome::Scraped(count)));
    }

    Ok(report)
}
