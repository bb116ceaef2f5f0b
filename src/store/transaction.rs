use crate::models::TransactionRecord;

use super::Store;

/// Past transactions, most recent first
pub fn get_recent_transactions(store: &Store) -> &[TransactionRecord] {
    &store.transactions
}
