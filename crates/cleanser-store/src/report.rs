//! User-statistics read flow.

use std::collections::HashSet;

use cleanser_core::{tally_submitters, top_submitters};

use crate::{CleanserStore, StoreError};

/// Rank submitters of cleansed items, excluding blacklisted users.
///
/// Returns at most `limit` `(user, count)` pairs, highest count first;
/// equal counts order by username ascending.
pub async fn user_statistics<S: CleanserStore + ?Sized>(
    store: &S,
    limit: usize,
) -> Result<Vec<(String, u64)>, StoreError> {
    let counts = tally_submitters(store.cleansed_submitters().await?);
    let blacklisted: HashSet<String> = store.blacklisted_users().await?.into_iter().collect();
    Ok(top_submitters(counts, &blacklisted, limit))
}
