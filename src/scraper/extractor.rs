// src/scraper/extractor.rs

use crate::domain::Listing;
use crate::scraper::ScraperError;
use scraper::{ElementRef, Selector};

/// Turns one markup node of a source's result page into a listing.
///
/// Each source implements this once. The collector asks for the node
/// selector, filters with [`ListingExtractor::accepts`], then calls
/// [`ListingExtractor::extract`] on every surviving node.
pub trait ListingExtractor {
    /// Human-readable source name, used in logs and errors.
    fn label(&self) -> &'static str;

    /// Selector for candidate nodes (tag + class, or tag + attribute).
    fn item_selector(&self) -> &Selector;

    /// Extra filter for candidates a CSS selector cannot express.
    fn accepts(&self, _node: &ElementRef) -> bool {
        true
    }

    /// `Ok(None)` means the node has no derivable id and is dropped.
    fn extract(&self, node: ElementRef) -> Result<Option<Listing>, ScraperError>;
}
