//! Review-score normalisation.
//!
//! The site scores hotels out of 10 and may use a decimal comma
//! (`"8,4"`).  Output uses a 5-point scale with one decimal.

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Convert a scraped 10-point score into a 5-point rating string.
///
/// Returns `None` when the text is empty or not a number, so the caller can
/// substitute a placeholder.  Infinities clamp to the nearest bound and NaN
/// lands on [`MIN_RATING`].
pub fn normalize_rating(score_text: &str) -> Option<String> {
    let score: f64 = score_text.trim().replace(',', ".").parse().ok()?;
    let rating = if score.is_nan() {
        MIN_RATING
    } else {
        (score / 2.0).clamp(MIN_RATING, MAX_RATING)
    };
    Some(format!("{rating:.1}"))
}
