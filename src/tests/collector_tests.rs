// Whole-page extraction for both sources.

use super::utils::{test_config, RENOV_PAGE, TOKYO_R_PAGE};
use crate::scraper::{collect_listings, Source};
use std::path::Path;

fn collect(source: Source, html: &str) -> Vec<crate::domain::Listing> {
    let config = test_config(Path::new("unused"));
    let extractor = source.extractor(source.site(&config));
    collect_listings(html, extractor.as_ref())
}

#[test]
fn tokyo_r_page_yields_deduplicated_listings_in_order() {
    let listings = collect(Source::TokyoR, TOKYO_R_PAGE);

    let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1001", "1002"]);

    let first = &listings[0];
    assert_eq!(first.title, "神南のアトリエ");
    assert_eq!(first.location, "渋谷区神南");
    assert_eq!(first.rent, "21万5,000～53万円");
    assert_eq!(first.url, "https://www.realtokyoestate.co.jp/estate.php?n=1001");

    let second = &listings[1];
    assert_eq!(second.title, "Listing 1002");
    assert_eq!(second.location, "目黒区青葉台");
    assert_eq!(second.rent, "18万円");
    assert_eq!(second.area, "45.5㎡");
    assert_eq!(second.station, "東急東横「代官山」駅 徒歩3分");
}

#[test]
fn renov_page_skips_cards_without_a_detail_link() {
    let listings = collect(Source::Renov, RENOV_PAGE);

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].id, "ka260120_2");
    assert_eq!(listings[0].rent, "190,000円/5,300円");
    assert_eq!(listings[0].station, "東急東横線「中目黒」駅 徒歩6分");
    assert_eq!(listings[1].id, "mx0002");
    assert_eq!(listings[1].title, "Listing mx0002");
    assert_eq!(listings[1].rent, "230,000円");
    assert_eq!(listings[1].area, "62.1㎡");
    assert!(listings.iter().all(|l| l.location.is_empty()));
}

#[test]
fn collection_is_deterministic() {
    assert_eq!(collect(Source::TokyoR, TOKYO_R_PAGE), collect(Source::TokyoR, TOKYO_R_PAGE));
    assert_eq!(collect(Source::Renov, RENOV_PAGE), collect(Source::Renov, RENOV_PAGE));
}

#[test]
fn every_collected_listing_has_id_and_url() {
    for (source, page) in [(Source::TokyoR, TOKYO_R_PAGE), (Source::Renov, RENOV_PAGE)] {
        for listing in collect(source, page) {
            assert!(!listing.id.is_empty());
            assert!(!listing.url.is_empty());
        }
    }
}
