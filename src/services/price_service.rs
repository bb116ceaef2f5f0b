use crate::models::Listing;
use crate::utils::to_fixed;

/// Parse the free-form amount typed into the purchase dialog.
/// Returns `None` for empty, non-numeric or non-finite input.
pub fn parse_requested_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Total price for `requested` stars of `listing`; unparseable input counts as zero
pub fn calculate_total(listing: &Listing, requested: &str) -> f64 {
    match parse_requested_amount(requested) {
        Some(amount) => amount * listing.unit_price(),
        None => 0.0,
    }
}

/// Price of one star with 3 decimals, e.g. "0.100"
pub fn format_unit_price(listing: &Listing) -> String {
    to_fixed(listing.unit_price(), 3)
}

/// Total price with 2 decimals, e.g. "49.99"
pub fn format_total(listing: &Listing, requested: &str) -> String {
    to_fixed(calculate_total(listing, requested), 2)
}

/// Whether `requested` is a positive number of stars
pub fn is_positive_amount(requested: &str) -> bool {
    matches!(parse_requested_amount(requested), Some(amount) if amount > 0.0)
}
