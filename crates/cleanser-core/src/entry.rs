//! Blacklist entry types shared between the store and the CLI tools.
//!
//! Each type serializes to the exact document shape its collection holds,
//! so the driver's typed collections need no hand-written BSON mapping.

use serde::{Deserialize, Serialize};

/// A rule against story titles, stored in `blacklistedTitles`.
///
/// Internally tagged on `type`: a document carries exactly one of
/// `text`, `keyword`, or `regex` next to its tag.
///
/// - `Text` blocks titles containing the value anywhere, including inside
///   words (`"gpt"` matches "GPT3.5").
/// - `Keyword` blocks titles containing the value as an exact word
///   (`"trump"` does not match "trumpet").
/// - `Regex` blocks titles matching the pattern; patterns are
///   Javascript-flavored, evaluated by the consumer, and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TitleRule {
    Text { text: String },
    Keyword { keyword: String },
    Regex { regex: String },
}

impl TitleRule {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text { text: value.into() }
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self::Keyword {
            keyword: value.into(),
        }
    }

    pub fn regex(value: impl Into<String>) -> Self {
        Self::Regex {
            regex: value.into(),
        }
    }

    /// The rule's value, whichever variant holds it.
    pub fn value(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Keyword { keyword } => keyword,
            Self::Regex { regex } => regex,
        }
    }

    /// Name of the discriminant field in the stored document.
    ///
    /// Duplicate checks filter on this field, never on the `type` tag.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Keyword { .. } => "keyword",
            Self::Regex { .. } => "regex",
        }
    }

    /// Human-readable category label for duplicate notices.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text { .. } => "Title text",
            Self::Keyword { .. } => "Title keyword",
            Self::Regex { .. } => "Title regex",
        }
    }
}

/// A blacklisted source site, stored in `blacklistedSites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub site: String,
}

/// A blacklisted submitter, stored in `blacklistedUsers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub user: String,
}

/// A previously ingested and filtered submission in `cleansedItems`.
///
/// Written by the ingestion pipeline; this repository only reads the
/// attribution. All other fields are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CleansedItem {
    pub user: String,
}
