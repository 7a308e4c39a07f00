//! Random stand-ins for fields the results page does not provide.
//!
//! Price and phone number are never on the listing page, so every record
//! gets a generated value.  Rating and facilities only fall back to these
//! when scraping came up empty.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pool the random facility list is drawn from.
pub const FEATURES: &[&str] = &[
    "Wifi",
    "Piscine",
    "Spa",
    "Restaurant",
    "Parking",
    "Gym",
    "Vue mer",
    "Pet-friendly",
    "Navette aéroport",
    "Bar",
    "Climatisation",
];

/// Nightly price between `50.00` and `500.99`.
pub fn price<R: Rng + ?Sized>(rng: &mut R) -> String {
    let units: u32 = rng.gen_range(50..=500);
    let cents: u32 = rng.gen_range(0..=99);
    format!("{units}.{cents:02}")
}

/// Ten-digit mobile-style number: `0`, then 5/6/7, then eight digits.
pub fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = [5u8, 6, 7][rng.gen_range(0..3)];
    let line: u32 = rng.gen_range(10_000_000..=99_999_999);
    format!("0{prefix}{line:08}")
}

/// Plausible rating between `2.5` and `4.9`, one decimal.
pub fn rating<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value: f64 = rng.gen_range(2.5..=4.9);
    format!("{value:.1}")
}

/// Two to five distinct entries from [`FEATURES`], comma-separated.
pub fn features<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(2..=5);
    FEATURES
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
