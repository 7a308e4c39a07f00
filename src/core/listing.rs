//! HTML extraction — turn a search-results page into raw [`Listing`]s.
//!
//! The site marks each hotel with a `data-testid="property-card"` block.
//! Inside a card most fields only carry obfuscated CSS classes, so the
//! selectors below are tied to the current page markup and will need
//! updating when the site reshuffles its class names.

use scraper::{ElementRef, Html, Selector};

// ───────────────────────────────────────── selectors ─────────

const CARD: &str = r#"div[data-testid="property-card"]"#;
const NAME: &str = "div.b87c397a13";
const DESCRIPTION: &str = "div.abf093bdfe";
const REVIEW_SCORE: &str = r#"div[data-testid="review-score"]"#;
const SCORE_VALUE: &str = "div.b0b8de40e6";
const RATING_TEXT: &str = "div.f7385d32fa";
const DISTANCE: &str = r#"span[data-testid="distance"]"#;
const FACILITIES: &str = "div.d22a7c133b";
const FACILITY_ITEM: &str = "span, div";
const IMAGE: &str = r#"img[data-testid="image"]"#;

/// Most facility items we keep from a single card.
pub const MAX_FACILITIES: usize = 5;

/// Fields scraped from one property card, exactly as found on the page.
/// `None` means the element was not present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Review score on the site's 10-point scale, e.g. `"8,4"`.
    pub score: Option<String>,
    /// Verbal review label, e.g. `"Very good"`.
    pub rating_text: Option<String>,
    pub distance: Option<String>,
    pub facilities: Vec<String>,
    pub image_url: Option<String>,
}

/// Compiled selectors for a results page.  Build once, reuse per city.
pub struct ListingParser {
    card: Selector,
    name: Selector,
    description: Selector,
    review_score: Selector,
    score_value: Selector,
    rating_text: Selector,
    distance: Selector,
    facilities: Selector,
    facility_item: Selector,
    image: Selector,
}

fn selector(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid selector `{css}`: {e}"))
}

impl ListingParser {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            card: selector(CARD)?,
            name: selector(NAME)?,
            description: selector(DESCRIPTION)?,
            review_score: selector(REVIEW_SCORE)?,
            score_value: selector(SCORE_VALUE)?,
            rating_text: selector(RATING_TEXT)?,
            distance: selector(DISTANCE)?,
            facilities: selector(FACILITIES)?,
            facility_item: selector(FACILITY_ITEM)?,
            image: selector(IMAGE)?,
        })
    }

    /// Extract every property card on the page, in document order.
    pub fn parse_page(&self, html: &str) -> Vec<Listing> {
        let document = Html::parse_document(html);
        document
            .select(&self.card)
            .map(|card| self.parse_card(card))
            .collect()
    }

    fn parse_card(&self, card: ElementRef<'_>) -> Listing {
        let score_block = card.select(&self.review_score).next();
        let score = score_block
            .and_then(|block| block.select(&self.score_value).next())
            .map(stripped_text);

        Listing {
            name: first_text(card, &self.name),
            description: first_text(card, &self.description),
            score,
            // Usually inside the review-score block, which the card-wide
            // lookup already covers.
            rating_text: first_text(card, &self.rating_text),
            distance: first_text(card, &self.distance),
            facilities: self.facilities(card),
            image_url: card
                .select(&self.image)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(str::to_string),
        }
    }

    fn facilities(&self, card: ElementRef<'_>) -> Vec<String> {
        let Some(container) = card.select(&self.facilities).next() else {
            return Vec::new();
        };

        let mut items: Vec<ElementRef<'_>> = container
            .select(&self.facility_item)
            .filter(|el| {
                el.value()
                    .classes()
                    .any(|c| c.contains("facility") || c.contains("amenity"))
            })
            .collect();
        if items.is_empty() {
            items = container
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|el| matches!(el.value().name(), "span" | "div"))
                .collect();
        }

        let mut out: Vec<String> = Vec::new();
        for item in items {
            let text = stripped_text(item);
            let len = text.chars().count();
            if len > 2 && len < 50 && !out.contains(&text) {
                out.push(text);
                if out.len() == MAX_FACILITIES {
                    break;
                }
            }
        }
        out
    }
}

/// Concatenate all descendant text nodes, each trimmed, empties dropped.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(stripped_text)
}
