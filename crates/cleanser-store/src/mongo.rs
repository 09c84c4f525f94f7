//! MongoDB storage backend.

use async_trait::async_trait;
use cleanser_core::{CleansedItem, SiteEntry, TitleRule, UserEntry};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use crate::{CleanserStore, StoreError};

pub const BLACKLISTED_TITLES: &str = "blacklistedTitles";
pub const BLACKLISTED_SITES: &str = "blacklistedSites";
pub const BLACKLISTED_USERS: &str = "blacklistedUsers";
pub const CLEANSED_ITEMS: &str = "cleansedItems";
pub const WEEKLY_REPORTS_LOG: &str = "weeklyReportsLog";

/// Every collection the cleanser database holds. `weeklyReportsLog` is
/// written by the report mailer, not by these tools, but a database
/// reset drops it along with the rest.
const ALL_COLLECTIONS: &[&str] = &[
    BLACKLISTED_TITLES,
    BLACKLISTED_SITES,
    BLACKLISTED_USERS,
    CLEANSED_ITEMS,
    WEEKLY_REPORTS_LOG,
];

/// MongoDB-backed store for the cleanser database.
///
/// Constructed from an explicit connection URI and database name. The
/// driver connects lazily, so an unreachable server surfaces as a
/// [`StoreError`] on the first operation rather than here.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Create a store handle for `db_name` on the server at `uri`.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        debug!(uri, db_name, "created mongodb client");
        Ok(Self {
            db: client.database(db_name),
        })
    }

    fn titles(&self) -> Collection<TitleRule> {
        self.db.collection(BLACKLISTED_TITLES)
    }

    fn sites(&self) -> Collection<SiteEntry> {
        self.db.collection(BLACKLISTED_SITES)
    }

    fn users(&self) -> Collection<UserEntry> {
        self.db.collection(BLACKLISTED_USERS)
    }

    fn cleansed(&self) -> Collection<CleansedItem> {
        self.db.collection(CLEANSED_ITEMS)
    }
}

#[async_trait]
impl CleanserStore for MongoStore {
    async fn title_rule_exists(&self, rule: &TitleRule) -> Result<bool, StoreError> {
        // Match on the discriminant field alone, as the filtering
        // consumer does.
        let mut filter = Document::new();
        filter.insert(rule.field(), rule.value());
        let count = self.titles().count_documents(filter).await?;
        Ok(count != 0)
    }

    async fn insert_title_rules(&self, rules: &[TitleRule]) -> Result<(), StoreError> {
        self.titles().insert_many(rules).await?;
        info!(count = rules.len(), "inserted title rules");
        Ok(())
    }

    async fn site_exists(&self, site: &str) -> Result<bool, StoreError> {
        let count = self.sites().count_documents(doc! { "site": site }).await?;
        Ok(count != 0)
    }

    async fn insert_sites(&self, sites: &[SiteEntry]) -> Result<(), StoreError> {
        self.sites().insert_many(sites).await?;
        info!(count = sites.len(), "inserted site entries");
        Ok(())
    }

    async fn user_exists(&self, user: &str) -> Result<bool, StoreError> {
        let count = self.users().count_documents(doc! { "user": user }).await?;
        Ok(count != 0)
    }

    async fn insert_users(&self, users: &[UserEntry]) -> Result<(), StoreError> {
        self.users().insert_many(users).await?;
        info!(count = users.len(), "inserted user entries");
        Ok(())
    }

    async fn blacklisted_users(&self) -> Result<Vec<String>, StoreError> {
        let entries: Vec<UserEntry> = self.users().find(doc! {}).await?.try_collect().await?;
        Ok(entries.into_iter().map(|e| e.user).collect())
    }

    async fn cleansed_submitters(&self) -> Result<Vec<String>, StoreError> {
        let mut cursor = self.cleansed().find(doc! {}).await?;
        let mut submitters = Vec::new();
        while let Some(item) = cursor.try_next().await? {
            submitters.push(item.user);
        }
        Ok(submitters)
    }

    async fn drop_all_collections(&self) -> Result<(), StoreError> {
        for name in ALL_COLLECTIONS {
            self.db.collection::<Document>(name).drop().await?;
            info!(collection = name, "dropped collection");
        }
        Ok(())
    }
}
