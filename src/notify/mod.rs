// src/notify/mod.rs

pub mod line;
pub mod message;

use crate::domain::Listing;

pub use line::LineNotifier;

/// Where new listings are sent. Returns how many listings were delivered.
pub trait NotificationSink {
    fn notify(&self, listings: &[Listing], site_name: &str) -> usize;
}

/// Used when LINE is not configured: prints new listings to stdout and
/// reports nothing as delivered.
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, listings: &[Listing], site_name: &str) -> usize {
        tracing::warn!(site = site_name, "LINE is not configured, printing new listings instead");
        println!("\n=== {site_name} 新着物件（通知なし）===");
        for listing in listings {
            println!("\n{}", listing.title);
            println!("{}", listing.location);
            println!("{} / {}", listing.rent, listing.area);
            println!("{}", listing.station);
            println!("{}", listing.url);
        }
        0
    }
}
