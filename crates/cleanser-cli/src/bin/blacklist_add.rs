//! Adds the specified items to the appropriate blacklist collection.

use clap::{CommandFactory, Parser};
use cleanser_cli::DbArgs;
use cleanser_core::TitleRule;
use cleanser_store::blacklist::{self, AddOutcome};
use cleanser_store::MongoStore;

#[derive(Debug, Parser)]
#[command(
    name = "blacklist-add",
    about = "Adds the specified items to the appropriate blacklist collection"
)]
struct Cli {
    /// Blacklist stories if their title contains this text anywhere,
    /// including inside words (the text "gpt" matches "GPT", "GPT3.5", etc.)
    #[arg(short = 't', long, value_name = "STRING", num_args = 1..)]
    text: Vec<String>,

    /// Blacklist stories if their title contains this exact string, but not
    /// words containing it as a substring ("trump" does not match "trumpet")
    #[arg(short = 'k', long, value_name = "STRING", num_args = 1..)]
    keyword: Vec<String>,

    /// Blacklist stories if their title matches this regex. Regex must be
    /// Javascript flavored
    #[arg(short = 'r', long, value_name = "STRING", num_args = 1..)]
    regex: Vec<String>,

    /// Blacklist stories from this source (e.g. "newyorker.com")
    #[arg(short = 's', long, value_name = "STRING", num_args = 1..)]
    site: Vec<String>,

    /// Blacklist all stories added by a particular user
    #[arg(short = 'u', long, value_name = "STRING", num_args = 1..)]
    user: Vec<String>,

    #[command(flatten)]
    db: DbArgs,
}

impl Cli {
    fn has_items(&self) -> bool {
        !(self.text.is_empty()
            && self.keyword.is_empty()
            && self.regex.is_empty()
            && self.site.is_empty()
            && self.user.is_empty())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cleanser_cli::init_tracing();
    let cli = Cli::parse();

    if !cli.has_items() {
        println!("At least one item to blacklist must be supplied\n");
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let store = cli.db.connect().await?;

    // Title categories are checked and inserted independently, one bulk
    // insert each.
    let texts = cli.text.into_iter().map(TitleRule::text).collect();
    add_title_category(&store, texts).await?;
    let keywords = cli.keyword.into_iter().map(TitleRule::keyword).collect();
    add_title_category(&store, keywords).await?;
    let regexes = cli.regex.into_iter().map(TitleRule::regex).collect();
    add_title_category(&store, regexes).await?;

    if !cli.site.is_empty() {
        let outcome = blacklist::add_sites(&store, cli.site).await?;
        print_duplicates("Site", &outcome);
    }
    if !cli.user.is_empty() {
        let outcome = blacklist::add_users(&store, cli.user).await?;
        print_duplicates("User", &outcome);
    }

    Ok(())
}

async fn add_title_category(store: &MongoStore, rules: Vec<TitleRule>) -> anyhow::Result<()> {
    if rules.is_empty() {
        return Ok(());
    }
    let outcome = blacklist::add_title_rules(store, rules).await?;
    for dup in &outcome.duplicates {
        println!("{} \"{}\" is already blacklisted", dup.label(), dup.value());
    }
    Ok(())
}

fn print_duplicates(label: &str, outcome: &AddOutcome<String>) {
    for dup in &outcome.duplicates {
        println!("{label} \"{dup}\" is already blacklisted");
    }
}
