//! Marketplace listing models

use serde::Deserialize;

/// A seller's offer of a fixed star quantity at a fixed total price
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub seller: String,
    /// Total stars offered
    pub amount: u64,
    /// Total price in USD for the whole amount
    pub price: f64,
    pub rating: f64,
    pub trades: u32,
}

impl Listing {
    /// Price of a single star. The store rejects listings with a zero amount.
    pub fn unit_price(&self) -> f64 {
        self.price / self.amount as f64
    }

    /// First letter of the seller name, used as the avatar
    pub fn initial(&self) -> char {
        self.seller.chars().next().unwrap_or('?')
    }
}
