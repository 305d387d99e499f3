// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything seen for one source as of the last successful run, keyed by listing id.
pub type Snapshot = HashMap<String, Listing>;

/// A rental listing, normalized from either source's markup.
///
/// Every field is plain text taken verbatim from the page. A field that
/// could not be found is an empty string, never missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Rent exactly as printed (ranges, "（税込）", "rent/fee" pairs are kept).
    pub rent: String,
    pub area: String,
    pub station: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl Listing {
    /// Starts a listing from its two required fields. Everything else is empty
    /// and the title is the synthetic fallback until a real one is set.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: fallback_title(&id),
            id,
            location: String::new(),
            rent: String::new(),
            area: String::new(),
            station: String::new(),
            url: url.into(),
            description: String::new(),
        }
    }

    /// Replaces the fallback title, unless `title` is empty.
    pub fn with_title(mut self, title: String) -> Self {
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    /// Short one-line form used in run logs.
    pub fn summary(&self) -> String {
        format!("{} ({} / {})", self.title, self.rent, self.area)
    }
}

pub fn fallback_title(id: &str) -> String {
    format!("Listing {id}")
}

/// Builds the keyed snapshot for a collection pass. Later duplicates do not
/// replace the first occurrence.
pub fn to_snapshot(listings: &[Listing]) -> Snapshot {
    let mut snapshot = Snapshot::with_capacity(listings.len());
    for listing in listings {
        snapshot
            .entry(listing.id.clone())
            .or_insert_with(|| listing.clone());
    }
    snapshot
}
