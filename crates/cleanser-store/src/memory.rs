//! In-memory storage backend, used by the flow tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use cleanser_core::{SiteEntry, TitleRule, UserEntry};

use crate::{CleanserStore, StoreError};

/// Ephemeral store holding every collection in process memory.
///
/// Matches [`MongoStore`](crate::MongoStore) semantics: title-rule
/// existence checks compare the discriminant field and value, not the
/// `type` tag.
#[derive(Default)]
pub struct MemStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    titles: Vec<TitleRule>,
    sites: Vec<SiteEntry>,
    users: Vec<UserEntry>,
    cleansed: Vec<String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("MemStore lock poisoned")
    }

    /// Seed a cleansed item attributed to `user`.
    pub fn add_cleansed_item(&self, user: &str) {
        self.locked().cleansed.push(user.to_string());
    }

    pub fn title_rules(&self) -> Vec<TitleRule> {
        self.locked().titles.clone()
    }

    pub fn site_entries(&self) -> Vec<SiteEntry> {
        self.locked().sites.clone()
    }

    pub fn user_entries(&self) -> Vec<UserEntry> {
        self.locked().users.clone()
    }

    pub fn cleansed_count(&self) -> usize {
        self.locked().cleansed.len()
    }
}

#[async_trait]
impl CleanserStore for MemStore {
    async fn title_rule_exists(&self, rule: &TitleRule) -> Result<bool, StoreError> {
        let exists = self
            .locked()
            .titles
            .iter()
            .any(|r| r.field() == rule.field() && r.value() == rule.value());
        Ok(exists)
    }

    async fn insert_title_rules(&self, rules: &[TitleRule]) -> Result<(), StoreError> {
        self.locked().titles.extend_from_slice(rules);
        Ok(())
    }

    async fn site_exists(&self, site: &str) -> Result<bool, StoreError> {
        Ok(self.locked().sites.iter().any(|e| e.site == site))
    }

    async fn insert_sites(&self, sites: &[SiteEntry]) -> Result<(), StoreError> {
        self.locked().sites.extend_from_slice(sites);
        Ok(())
    }

    async fn user_exists(&self, user: &str) -> Result<bool, StoreError> {
        Ok(self.locked().users.iter().any(|e| e.user == user))
    }

    async fn insert_users(&self, users: &[UserEntry]) -> Result<(), StoreError> {
        self.locked().users.extend_from_slice(users);
        Ok(())
    }

    async fn blacklisted_users(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.locked().users.iter().map(|e| e.user.clone()).collect())
    }

    async fn cleansed_submitters(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.locked().cleansed.clone())
    }

    async fn drop_all_collections(&self) -> Result<(), StoreError> {
        let mut inner = self.locked();
        inner.titles.clear();
        inner.sites.clear();
        inner.users.clear();
        inner.cleansed.clear();
        Ok(())
    }
}
