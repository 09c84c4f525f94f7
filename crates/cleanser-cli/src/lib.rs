//! Shared CLI plumbing: connection flags and store construction.

use anyhow::Context;
use clap::Args;
use cleanser_store::MongoStore;

pub const DEFAULT_DB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME: &str = "hackerNewsCleanserDb";

/// Database connection target, shared by every binary.
#[derive(Debug, Args)]
pub struct DbArgs {
    /// MongoDB connection URI.
    #[arg(long, env = "CLEANSER_DB_URI", default_value = DEFAULT_DB_URI)]
    pub db_uri: String,

    /// Database holding the cleanser collections.
    #[arg(long, env = "CLEANSER_DB_NAME", default_value = DEFAULT_DB_NAME)]
    pub db_name: String,
}

impl DbArgs {
    /// Build a store handle for the configured target.
    pub async fn connect(&self) -> anyhow::Result<MongoStore> {
        MongoStore::connect(&self.db_uri, &self.db_name)
            .await
            .with_context(|| format!("connecting to {}", self.db_uri))
    }
}

/// Install the fmt subscriber, logging to stderr so program output on
/// stdout stays parseable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        db: DbArgs,
    }

    #[test]
    fn connection_defaults() {
        let cli = TestCli::parse_from(["test"]);
        assert_eq!(cli.db.db_uri, DEFAULT_DB_URI);
        assert_eq!(cli.db.db_name, DEFAULT_DB_NAME);
    }

    #[test]
    fn connection_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "test",
            "--db-uri",
            "mongodb://db.internal:27017",
            "--db-name",
            "stagingDb",
        ]);
        assert_eq!(cli.db.db_uri, "mongodb://db.internal:27017");
        assert_eq!(cli.db.db_name, "stagingDb");
    }
}
