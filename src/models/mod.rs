//! Data models for the StarMarket page
//!
//! Fixture records loaded by the store and the notification payload
//! produced by the purchase workflow.

pub mod listing;
pub mod transaction;
pub mod dashboard;
pub mod notification;

// Re-export commonly used types for convenience
pub use listing::Listing;
pub use transaction::{TransactionRecord, TransactionKind, TransactionStatus};
pub use dashboard::{HomeStat, WalletSummary, ProfileCard};
pub use notification::Notification;
