// src/scraper/renov.rs
//
// Source B: each hit is a <div class="property-item"> card with labeled
// spans (title / place / price) and a detail link /detail/<area>/<id>/.

use crate::domain::Listing;
use crate::scraper::ListingExtractor;
use crate::scraper::text::{compact_text, first_match, flat_text};
use crate::scraper::ScraperError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

static DETAIL_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/detail/\d+/(\w+)/").expect("detail href regex is valid"));
// "190,000円", "190,000円/5,300円"
static RENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d[\d,]*円(?:/\d[\d,]*円)?").expect("rent regex is valid"));
static AREA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?㎡").expect("area regex is valid"));

static CARD: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.property-item").expect("valid selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.title").expect("valid selector"));
static PLACE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.place").expect("valid selector"));
static PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.price").expect("valid selector"));

/// A result card with its price label already flattened.
pub struct Card<'a> {
    node: ElementRef<'a>,
    price_text: String,
}

impl<'a> Card<'a> {
    pub fn new(node: ElementRef<'a>) -> Self {
        let price_text = node
            .select(&PRICE)
            .next()
            .map(|price| flat_text(&price))
            .unwrap_or_default();
        Self { node, price_text }
    }

    fn label_text(&self, selector: &Selector) -> Option<String> {
        self.node.select(selector).next().map(|el| compact_text(&el))
    }
}

type CardRule = (&'static str, for<'r, 'a> fn(&'r Card<'a>) -> Option<String>);

const TITLE_RULES: &[CardRule] = &[("title_label", title_label)];
const STATION_RULES: &[CardRule] = &[("place_label", place_label)];
const RENT_RULES: &[CardRule] = &[("yen_amounts", rent_in_price)];
const AREA_RULES: &[CardRule] = &[("square_meters", area_in_price)];

pub struct LabeledSpanExtractor {
    label: &'static str,
    base_url: String,
}

impl LabeledSpanExtractor {
    pub fn new(label: &'static str, base_url: impl Into<String>) -> Self {
        Self {
            label,
            base_url: base_url.into(),
        }
    }
}

impl ListingExtractor for LabeledSpanExtractor {
    fn label(&self) -> &'static str {
        self.label
    }

    fn item_selector(&self) -> &Selector {
        &CARD
    }

    fn extract(&self, node: ElementRef) -> Result<Option<Listing>, ScraperError> {
        let detail = node.select(&LINK).find_map(|a| {
            let href = a.value().attr("href")?;
            let id = DETAIL_HREF.captures(href)?[1].to_string();
            Some((href, id))
        });
        let Some((href, id)) = detail else {
            return Ok(None);
        };

        let card = Card::new(node);
        let field = |name: &str, rules: &[CardRule]| {
            first_match(name, &card, rules).unwrap_or_default()
        };

        // Location is not shown on the result cards.
        let mut listing = Listing::new(id, format!("{}{}", self.base_url, href))
            .with_title(field("title", TITLE_RULES));
        listing.station = field("station", STATION_RULES);
        listing.rent = field("rent", RENT_RULES);
        listing.area = field("area", AREA_RULES);

        Ok(Some(listing))
    }
}

fn title_label(card: &Card) -> Option<String> {
    card.label_text(&TITLE)
}

fn place_label(card: &Card) -> Option<String> {
    card.label_text(&PLACE)
}

fn rent_in_price(card: &Card) -> Option<String> {
    RENT.find(&card.price_text).map(|m| m.as_str().to_string())
}

fn area_in_price(card: &Card) -> Option<String> {
    AREA.find(&card.price_text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const BASE: &str = "https://www.renov-depart.jp";

    fn extract_first(html: &str) -> Option<Listing> {
        let doc = Html::parse_document(html);
        let extractor = LabeledSpanExtractor::new("リノベ百貨店", BASE);
        let node = doc.select(extractor.item_selector()).next().unwrap();
        extractor.extract(node).unwrap()
    }

    #[test]
    fn extracts_labeled_fields() {
        let listing = extract_first(
            r#"<div class="property-item">
                <a href="/detail/001/ka260120_2/"><img src="x.jpg"></a>
                <span class="title fnt-bold">目黒の光庭ハウス</span>
                <span class="place">東急東横線「中目黒」駅 徒歩6分</span>
                <span class="price"><b>190,000円</b>/5,300円 <i>58.32㎡</i> 2LDK</span>
            </div>"#,
        )
        .unwrap();

        assert_eq!(listing.id, "ka260120_2");
        assert_eq!(listing.url, "https://www.renov-depart.jp/detail/001/ka260120_2/");
        assert_eq!(listing.title, "目黒の光庭ハウス");
        assert_eq!(listing.station, "東急東横線「中目黒」駅 徒歩6分");
        assert_eq!(listing.rent, "190,000円");
        assert_eq!(listing.area, "58.32㎡");
        assert_eq!(listing.location, "");
        assert_eq!(listing.description, "");
    }

    #[test]
    fn dual_charge_rent_is_kept_together() {
        let listing = extract_first(
            r#"<div class="property-item">
                <a href="/detail/013/rx99/">詳細</a>
                <span class="price">190,000円/5,300円 60.1㎡</span>
            </div>"#,
        )
        .unwrap();
        assert_eq!(listing.rent, "190,000円/5,300円");
        assert_eq!(listing.area, "60.1㎡");
    }

    #[test]
    fn missing_title_is_synthesized() {
        let listing = extract_first(
            r#"<div class="property-item"><a href="/detail/013/rx99/">詳細</a></div>"#,
        )
        .unwrap();
        assert_eq!(listing.title, "Listing rx99");
        assert_eq!(listing.rent, "");
        assert_eq!(listing.station, "");
    }

    #[test]
    fn card_without_detail_link_is_discarded() {
        let listing = extract_first(
            r#"<div class="property-item">
                <a href="/contact/">問い合わせ</a>
                <span class="title">名前だけの物件</span>
            </div>"#,
        );
        assert!(listing.is_none());
    }
}
