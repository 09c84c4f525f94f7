//! Blacklist write flow: per-category duplicate check and staged bulk
//! insert.
//!
//! Each category is processed independently: every supplied value is
//! checked against the store, duplicates are set aside, and whatever
//! remains goes into a single bulk insert. Printing the duplicate
//! notices is the caller's job.

use cleanser_core::{SiteEntry, TitleRule, UserEntry};

use crate::{CleanserStore, StoreError};

/// Result of one category's write pass.
#[derive(Debug)]
pub struct AddOutcome<T> {
    /// Values staged and bulk-inserted, in the order supplied.
    pub inserted: Vec<T>,
    /// Values already present in the store, skipped.
    pub duplicates: Vec<T>,
}

impl<T> AddOutcome<T> {
    fn new() -> Self {
        Self {
            inserted: Vec::new(),
            duplicates: Vec::new(),
        }
    }
}

/// Add title rules, skipping any whose discriminant value is already
/// blacklisted under the same field.
pub async fn add_title_rules<S: CleanserStore + ?Sized>(
    store: &S,
    rules: Vec<TitleRule>,
) -> Result<AddOutcome<TitleRule>, StoreError> {
    let mut outcome = AddOutcome::new();
    for rule in rules {
        if store.title_rule_exists(&rule).await? {
            outcome.duplicates.push(rule);
        } else {
            outcome.inserted.push(rule);
        }
    }
    if !outcome.inserted.is_empty() {
        store.insert_title_rules(&outcome.inserted).await?;
    }
    Ok(outcome)
}

/// Add site entries, skipping sites already blacklisted.
pub async fn add_sites<S: CleanserStore + ?Sized>(
    store: &S,
    sites: Vec<String>,
) -> Result<AddOutcome<String>, StoreError> {
    let mut outcome = AddOutcome::new();
    for site in sites {
        if store.site_exists(&site).await? {
            outcome.duplicates.push(site);
        } else {
            outcome.inserted.push(site);
        }
    }
    if !outcome.inserted.is_empty() {
        let entries: Vec<SiteEntry> = outcome
            .inserted
            .iter()
            .map(|site| SiteEntry { site: site.clone() })
            .collect();
        store.insert_sites(&entries).await?;
    }
    Ok(outcome)
}

/// Add user entries, skipping users already blacklisted.
pub async fn add_users<S: CleanserStore + ?Sized>(
    store: &S,
    users: Vec<String>,
) -> Result<AddOutcome<String>, StoreError> {
    let mut outcome = AddOutcome::new();
    for user in users {
        if store.user_exists(&user).await? {
            outcome.duplicates.push(user);
        } else {
            outcome.inserted.push(user);
        }
    }
    if !outcome.inserted.is_empty() {
        let entries: Vec<UserEntry> = outcome
            .inserted
            .iter()
            .map(|user| UserEntry { user: user.clone() })
            .collect();
        store.insert_users(&entries).await?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemStore;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn new_title_rules_are_inserted() {
        let store = MemStore::new();
        let outcome = add_title_rules(
            &store,
            vec![TitleRule::keyword("trump"), TitleRule::regex("^Ask HN")],
        )
        .await
        .unwrap();

        assert_eq!(outcome.inserted.len(), 2);
        assert!(outcome.duplicates.is_empty());
        assert_eq!(store.title_rules().len(), 2);
    }

    #[tokio::test]
    async fn duplicate_title_rule_is_skipped() {
        let store = MemStore::new();
        add_title_rules(&store, vec![TitleRule::keyword("trump")])
            .await
            .unwrap();

        let outcome = add_title_rules(&store, vec![TitleRule::keyword("trump")])
            .await
            .unwrap();
        assert!(outcome.inserted.is_empty());
        assert_eq!(outcome.duplicates, vec![TitleRule::keyword("trump")]);
        assert_eq!(store.title_rules().len(), 1, "collection must not grow");
    }

    #[tokio::test]
    async fn same_value_under_different_field_is_not_a_duplicate() {
        let store = MemStore::new();
        add_title_rules(&store, vec![TitleRule::text("gpt")])
            .await
            .unwrap();

        let outcome = add_title_rules(&store, vec![TitleRule::keyword("gpt")])
            .await
            .unwrap();
        assert_eq!(outcome.inserted.len(), 1);
        assert_eq!(store.title_rules().len(), 2);
    }

    #[tokio::test]
    async fn mixed_batch_inserts_only_new_rules() {
        let store = MemStore::new();
        add_title_rules(&store, vec![TitleRule::text("gpt")])
            .await
            .unwrap();

        let outcome = add_title_rules(
            &store,
            vec![TitleRule::text("gpt"), TitleRule::text("crypto")],
        )
        .await
        .unwrap();
        assert_eq!(outcome.inserted, vec![TitleRule::text("crypto")]);
        assert_eq!(outcome.duplicates, vec![TitleRule::text("gpt")]);
        assert_eq!(store.title_rules().len(), 2);
    }

    #[tokio::test]
    async fn sites_dedup_and_insert() {
        let store = MemStore::new();
        let first = add_sites(&store, strings(&["newyorker.com", "medium.com"]))
            .await
            .unwrap();
        assert_eq!(first.inserted.len(), 2);

        let second = add_sites(&store, strings(&["medium.com"])).await.unwrap();
        assert!(second.inserted.is_empty());
        assert_eq!(second.duplicates, strings(&["medium.com"]));
        assert_eq!(store.site_entries().len(), 2);
    }

    #[tokio::test]
    async fn users_dedup_and_insert() {
        let store = MemStore::new();
        add_users(&store, strings(&["troll42"])).await.unwrap();

        let outcome = add_users(&store, strings(&["troll42", "spammer"]))
            .await
            .unwrap();
        assert_eq!(outcome.inserted, strings(&["spammer"]));
        assert_eq!(outcome.duplicates, strings(&["troll42"]));
        assert_eq!(store.user_entries().len(), 2);
    }

    #[tokio::test]
    async fn rerun_with_same_values_changes_nothing() {
        let store = MemStore::new();
        let rules = vec![
            TitleRule::text("gpt"),
            TitleRule::keyword("trump"),
            TitleRule::regex("^Show HN"),
        ];

        add_title_rules(&store, rules.clone()).await.unwrap();
        add_sites(&store, strings(&["medium.com"])).await.unwrap();
        add_users(&store, strings(&["troll42"])).await.unwrap();

        let after_first = store.title_rules();

        let outcome = add_title_rules(&store, rules).await.unwrap();
        assert!(outcome.inserted.is_empty());
        add_sites(&store, strings(&["medium.com"])).await.unwrap();
        add_users(&store, strings(&["troll42"])).await.unwrap();

        assert_eq!(store.title_rules(), after_first);
        assert_eq!(store.site_entries().len(), 1);
        assert_eq!(store.user_entries().len(), 1);
    }
}
