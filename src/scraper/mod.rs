mod client;
mod collector;
mod extractor;
mod renov;
mod scraper_error;
mod source;
mod text;
mod tokyo_r;

pub use client::{FetchDocument, SourceClient};
pub use collector::collect_listings;
pub use extractor::ListingExtractor;
pub use scraper_error::ScraperError;
pub use source::{SearchRequest, Source};
