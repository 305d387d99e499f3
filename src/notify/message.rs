// src/notify/message.rs

use crate::domain::Listing;

/// LINE rejects text messages longer than this.
pub const MAX_MESSAGE_CHARS: usize = 5000;
/// More new listings than this are sent as a single summary.
pub const BATCH_THRESHOLD: usize = 3;
/// How many listings a summary spells out.
pub const SUMMARY_ITEMS: usize = 5;

pub fn single_listing(listing: &Listing, site_name: &str) -> String {
    format!(
        "【新着物件】{site_name}\n\n{}\n\n{}\n{} / {}\n{}\n\n{}",
        listing.title, listing.location, listing.rent, listing.area, listing.station, listing.url
    )
}

pub fn summary(listings: &[Listing], site_name: &str) -> String {
    let mut text = format!(
        "【新着物件】{site_name}\n\n{}件の新着物件があります！\n",
        listings.len()
    );
    for listing in listings.iter().take(SUMMARY_ITEMS) {
        text.push_str(&format!(
            "\n{}\n{} / {}\n{}\n",
            listing.title, listing.rent, listing.area, listing.url
        ));
    }
    if listings.len() > SUMMARY_ITEMS {
        text.push_str(&format!("\n...他{}件", listings.len() - SUMMARY_ITEMS));
    }
    text
}

/// The messages to send for one batch of new listings.
pub fn compose(listings: &[Listing], site_name: &str) -> Vec<String> {
    if listings.len() > BATCH_THRESHOLD {
        vec![summary(listings, site_name)]
    } else {
        listings
            .iter()
            .map(|listing| single_listing(listing, site_name))
            .collect()
    }
}

pub fn truncate(message: &str) -> String {
    message.chars().take(MAX_MESSAGE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(n: usize) -> Listing {
        let mut l = Listing::new(n.to_string(), format!("https://example.com/{n}"))
            .with_title(format!("物件{n}"));
        l.rent = "22万円".to_string();
        l.area = "45.5㎡".to_string();
        l
    }

    #[test]
    fn single_message_layout() {
        let mut l = listing(1);
        l.location = "渋谷区".to_string();
        l.station = "山手線「渋谷」駅 徒歩5分".to_string();

        assert_eq!(
            single_listing(&l, "東京R不動産"),
            "【新着物件】東京R不動産\n\n物件1\n\n渋谷区\n22万円 / 45.5㎡\n山手線「渋谷」駅 徒歩5分\n\nhttps://example.com/1"
        );
    }

    #[test]
    fn three_or_fewer_are_sent_individually() {
        let listings: Vec<_> = (1..=3).map(listing).collect();
        let messages = compose(&listings, "東京R不動産");
        assert_eq!(messages.len(), 3);
        assert!(messages[2].contains("物件3"));
    }

    #[test]
    fn more_than_three_become_one_summary() {
        let listings: Vec<_> = (1..=7).map(listing).collect();
        let messages = compose(&listings, "リノベ百貨店");

        assert_eq!(messages.len(), 1);
        let text = &messages[0];
        assert!(text.contains("7件の新着物件があります！"));
        assert!(text.contains("物件5"));
        assert!(!text.contains("物件6"));
        assert!(text.ends_with("...他2件"));
    }

    #[test]
    fn summary_of_exactly_five_has_no_remainder_line() {
        let listings: Vec<_> = (1..=5).map(listing).collect();
        assert!(!summary(&listings, "x").contains("...他"));
    }

    #[test]
    fn nothing_to_send_for_no_listings() {
        assert!(compose(&[], "x").is_empty());
    }

    #[test]
    fn truncate_counts_characters() {
        let long = "あ".repeat(MAX_MESSAGE_CHARS + 10);
        assert_eq!(truncate(&long).chars().count(), MAX_MESSAGE_CHARS);
        assert_eq!(truncate("short"), "short");
    }
}
