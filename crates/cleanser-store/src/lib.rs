//! Storage layer: MongoDB-backed production store and an in-memory store
//! for tests, behind one trait.

mod error;
pub use error::StoreError;

mod memory;
pub use memory::MemStore;

mod mongo;
pub use mongo::MongoStore;

pub mod blacklist;
pub mod report;

use async_trait::async_trait;
use cleanser_core::{SiteEntry, TitleRule, UserEntry};

/// Every database operation the admin tools perform.
///
/// A store handle is constructed explicitly and passed in; nothing in
/// this workspace reads a process-wide connection. [`MongoStore`] is the
/// production implementation, [`MemStore`] the ephemeral one.
#[async_trait]
pub trait CleanserStore {
    /// Whether a title rule with the same discriminant field and value
    /// already exists. The `type` tag is not part of the match.
    async fn title_rule_exists(&self, rule: &TitleRule) -> Result<bool, StoreError>;

    /// Bulk-insert title rules in one operation.
    async fn insert_title_rules(&self, rules: &[TitleRule]) -> Result<(), StoreError>;

    async fn site_exists(&self, site: &str) -> Result<bool, StoreError>;

    async fn insert_sites(&self, sites: &[SiteEntry]) -> Result<(), StoreError>;

    async fn user_exists(&self, user: &str) -> Result<bool, StoreError>;

    async fn insert_users(&self, users: &[UserEntry]) -> Result<(), StoreError>;

    /// Usernames of every blacklisted user.
    async fn blacklisted_users(&self) -> Result<Vec<String>, StoreError>;

    /// Submitter of every cleansed item, one entry per item.
    async fn cleansed_submitters(&self) -> Result<Vec<String>, StoreError>;

    /// Drop every collection this system knows about. Dropping a
    /// collection that does not exist is a success.
    async fn drop_all_collections(&self) -> Result<(), StoreError>;
}
