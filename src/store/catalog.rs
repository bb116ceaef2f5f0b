use crate::models::Listing;

use super::Store;

/// All listings in display order
pub fn get_listings(store: &Store) -> &[Listing] {
    &store.listings
}

/// Get a listing by its id
pub fn get_listing_by_id(store: &Store, id: u32) -> Option<&Listing> {
    store.listings.iter().find(|listing| listing.id == id)
}
