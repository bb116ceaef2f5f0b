//! Static dashboard models for the home, wallet and profile tabs

use chrono::NaiveDate;
use serde::Deserialize;

/// A headline figure on the home tab
#[derive(Debug, Clone, Deserialize)]
pub struct HomeStat {
    pub label: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletSummary {
    /// Available balance in stars
    pub balance: u64,
    pub usd_estimate: f64,
    /// Share of the weekly limit already used
    pub weekly_activity_percent: u8,
    pub bought: u64,
    pub sold: u64,
    pub fees: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileCard {
    pub username: String,
    pub member_since: NaiveDate,
    pub rating: f64,
    pub trades: u32,
    pub volume: String,
    #[serde(default)]
    pub notification_settings: Vec<String>,
}

impl ProfileCard {
    /// "Active since January 2025"
    pub fn member_since_label(&self) -> String {
        format!("Active since {}", self.member_since.format("%B %Y"))
    }
}
