//! Resets the cleanser database by dropping every collection, including
//! the report log written by the server. No confirmation is asked for.

use clap::Parser;
use cleanser_cli::DbArgs;
use cleanser_store::CleanserStore;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "db-clean", about = "Drops every cleanser collection")]
struct Cli {
    #[command(flatten)]
    db: DbArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cleanser_cli::init_tracing();
    let cli = Cli::parse();

    let store = cli.db.connect().await?;
    store.drop_all_collections().await?;
    info!(db_name = %cli.db.db_name, "database reset");
    Ok(())
}
