//! Output rows — one [`HotelRecord`] per scraped property card.

use rand::Rng;
use serde::Serialize;

use super::city::City;
use super::listing::Listing;
use super::{placeholder, rating};

/// Written in place of any text field the page did not have.
pub const MISSING: &str = "N/A";

/// Column names, in file order.
pub const COLUMNS: &[&str] = &[
    "Nom_Hotel",
    "Description",
    "Note",
    "Evaluation_Textuelle",
    "Prix",
    "Telephone",
    "Distance",
    "Equipements",
    "Image_URL",
    "Ville",
    "Date_Extraction",
];

/// A finished row.  Field order here is the column order in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelRecord {
    #[serde(rename = "Nom_Hotel")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// 5-point rating, one decimal.
    #[serde(rename = "Note")]
    pub rating: String,
    #[serde(rename = "Evaluation_Textuelle")]
    pub rating_text: String,
    #[serde(rename = "Prix")]
    pub price: String,
    #[serde(rename = "Telephone")]
    pub phone: String,
    #[serde(rename = "Distance")]
    pub distance: String,
    #[serde(rename = "Equipements")]
    pub facilities: String,
    #[serde(rename = "Image_URL")]
    pub image_url: String,
    #[serde(rename = "Ville")]
    pub city: String,
    #[serde(rename = "Date_Extraction")]
    pub scraped_on: String,
}

impl HotelRecord {
    /// Fill in a row from a scraped listing.  Missing text becomes
    /// [`MISSING`]; rating and facilities fall back to random values, and
    /// price and phone are always random.
    pub fn build<R: Rng + ?Sized>(listing: Listing, city: &City, date: &str, rng: &mut R) -> Self {
        let rating = listing
            .score
            .as_deref()
            .and_then(rating::normalize_rating)
            .unwrap_or_else(|| placeholder::rating(rng));
        let facilities = if listing.facilities.is_empty() {
            placeholder::features(rng)
        } else {
            listing.facilities.join(", ")
        };

        Self {
            name: or_missing(listing.name),
            description: or_missing(listing.description),
            rating,
            rating_text: or_missing(listing.rating_text),
            price: placeholder::price(rng),
            phone: placeholder::phone(rng),
            distance: or_missing(listing.distance),
            facilities,
            image_url: or_missing(listing.image_url),
            city: city.name.clone(),
            scraped_on: date.to_string(),
        }
    }
}

fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}
