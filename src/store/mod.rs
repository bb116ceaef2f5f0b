use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{HomeStat, Listing, ProfileCard, TransactionRecord, WalletSummary};

pub mod catalog;
pub mod transaction;

/// Fixtures compiled into the binary
const EMBEDDED_FIXTURES: &str = include_str!("../../data/fixtures.json");

/// Errors raised while loading the fixture store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read fixtures from {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Listing {0} offers zero stars")]
    EmptyListing(u32),
    #[error("Duplicate listing id {0}")]
    DuplicateListing(u32),
    #[error("Duplicate transaction id {0}")]
    DuplicateTransaction(u32),
}

/// Immutable page data, loaded once at startup and only ever borrowed
#[derive(Debug, Deserialize)]
pub struct Store {
    listings: Vec<Listing>,
    transactions: Vec<TransactionRecord>,
    home_stats: Vec<HomeStat>,
    wallet: WalletSummary,
    profile: ProfileCard,
}

impl Store {
    pub fn home_stats(&self) -> &[HomeStat] {
        &self.home_stats
    }

    pub fn wallet(&self) -> &WalletSummary {
        &self.wallet
    }

    pub fn profile(&self) -> &ProfileCard {
        &self.profile
    }
}

/// Load the store from `path`, or from the embedded fixtures when no path is given
pub fn init_store(path: Option<&Path>) -> Result<Store, StoreError> {
    let store = match path {
        Some(path) => {
            info!("Loading fixtures from {}", path.display());
            let raw = std::fs::read_to_string(path).map_err(|e| StoreError::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            parse_store(&raw)?
        }
        None => {
            debug!("Loading embedded fixtures");
            parse_store(EMBEDDED_FIXTURES)?
        }
    };

    info!(
        "Store ready: {} listings, {} transactions",
        store.listings.len(),
        store.transactions.len()
    );
    Ok(store)
}

/// Parse and validate fixture JSON
pub fn parse_store(raw: &str) -> Result<Store, StoreError> {
    let store: Store = serde_json::from_str(raw)?;

    let mut listing_ids = HashSet::new();
    for listing in &store.listings {
        if listing.amount == 0 {
            return Err(StoreError::EmptyListing(listing.id));
        }
        if !listing_ids.insert(listing.id) {
            return Err(StoreError::DuplicateListing(listing.id));
        }
    }

    let mut transaction_ids = HashSet::new();
    for record in &store.transactions {
        if !transaction_ids.insert(record.id) {
            return Err(StoreError::DuplicateTransaction(record.id));
        }
    }

    Ok(store)
}
