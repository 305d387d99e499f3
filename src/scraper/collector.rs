// src/scraper/collector.rs

use crate::domain::Listing;
use crate::scraper::ListingExtractor;
use crate::scraper::ScraperError;
use scraper::Html;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

/// Runs `extractor` over every candidate node of `html`.
///
/// Listings come back in document order. When two nodes yield the same id
/// the first one wins. A node whose extraction fails is logged and skipped;
/// it never aborts the rest of the page. An empty result just means the page
/// had no candidates.
pub fn collect_listings(html: &str, extractor: &dyn ListingExtractor) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut listings = Vec::new();
    let mut failed = 0usize;

    for node in document
        .select(extractor.item_selector())
        .filter(|node| extractor.accepts(node))
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(node)))
            .unwrap_or_else(|_| {
                Err(ScraperError::Extraction {
                    source_label: extractor.label(),
                    reason: "extractor panicked".to_string(),
                })
            });

        match outcome {
            Ok(Some(listing)) => {
                if seen.insert(listing.id.clone()) {
                    listings.push(listing);
                }
            }
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                tracing::error!(source = extractor.label(), error = %e, "failed to parse listing node");
            }
        }
    }

    if failed > 0 {
        tracing::warn!(source = extractor.label(), failed, "skipped unparseable nodes");
    }
    tracing::info!(source = extractor.label(), count = listings.len(), "collected listings");

    listings
}
