pub mod entry;
pub mod stats;

pub use entry::{CleansedItem, SiteEntry, TitleRule, UserEntry};
pub use stats::{tally_submitters, top_submitters};
