//! Per-user submission statistics.
//!
//! Pure aggregation over usernames pulled from the cleansed-item
//! collection: tally, drop blacklisted submitters, rank.

use std::collections::{HashMap, HashSet};

/// Count submissions per user.
pub fn tally_submitters<I>(users: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = HashMap::new();
    for user in users {
        *counts.entry(user).or_insert(0) += 1;
    }
    counts
}

/// Rank submitters by count, excluding blacklisted users.
///
/// Sorted by count descending; equal counts order by username ascending
/// so the ranking is deterministic. At most `limit` entries are returned.
pub fn top_submitters(
    counts: HashMap<String, u64>,
    blacklisted: &HashSet<String>,
    limit: usize,
) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = counts
        .into_iter()
        .filter(|(user, _)| !blacklisted.contains(user))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}
