//! Prints the top submitters of cleansed items, excluding blacklisted
//! users, as `user:count` lines.

use clap::Parser;
use cleanser_cli::DbArgs;
use cleanser_store::report;

const REPORT_LIMIT: usize = 10;

#[derive(Debug, Parser)]
#[command(
    name = "user-stats",
    about = "Prints per-user submission counts for cleansed items"
)]
struct Cli {
    #[command(flatten)]
    db: DbArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cleanser_cli::init_tracing();
    let cli = Cli::parse();

    let store = cli.db.connect().await?;
    for (user, count) in report::user_statistics(&store, REPORT_LIMIT).await? {
        println!("{user}:{count}");
    }
    Ok(())
}
