// src/scraper/tokyo_r.rs
//
// Source A: each search hit is an <a href="/estate.php?n=NNNN"> block that
// wraps a small table plus loose text. Nothing is labeled, so every field is
// pulled out with ordered pattern rules.

use crate::domain::Listing;
use crate::scraper::ListingExtractor;
use crate::scraper::text::{char_len, compact_text, first_match, flat_text, truncate_chars};
use crate::scraper::ScraperError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

static DETAIL_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/estate\.php\?n=\d+").expect("detail href regex is valid"));
static LISTING_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"n=(\d+)").expect("listing key regex is valid"));

// "22万円", "19万5,000円", "22万円（税込）", "21万5,000～53万円"
static RENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+万[\d,]*円?(?:（税込）)?(?:～\d+万[\d,]*)?円(?:（税込）)?")
        .expect("rent regex is valid")
});
// "40.04㎡", "35.54～83.75㎡"
static AREA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:\.\d+)?(?:～\d+(?:\.\d+)?)?㎡").expect("area regex is valid")
});
// "中央線「中野」駅 徒歩7分"
static STATION_ON_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\s]+線[^\s]*「[^」]+」駅\s*徒歩\d+分").expect("station regex is valid")
});
// "東急東横「代官山」駅 徒歩3分"
static STATION_WITH_OPERATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:JR|都営|東急|京急|小田急)?[^\s「]*「[^」]+」駅\s*徒歩\d+分")
        .expect("operator station regex is valid")
});
static ADMIN_UNIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[区市町]").expect("valid"));
static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:東京都)?[^\s]+[区市][^\s]*").expect("address regex is valid")
});

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));
static TABLE_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table td").expect("valid selector"));
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").expect("valid selector"));

const RENT_UNIT: &str = "万円";
const AREA_UNIT: &str = "㎡";
const STATION_MARK: &str = "駅";
const WALK_MARK: &str = "徒歩";
const TITLE_MARKER: &str = "rent";

const MAX_LOCATION_CHARS: usize = 30;
const MIN_TITLE_CHARS: usize = 3;
const MAX_TITLE_CHARS: usize = 50;
const MIN_DESCRIPTION_CHARS: usize = 20;
const MAX_DESCRIPTION_CHARS: usize = 100;

/// One anchor block plus its flattened text, computed once per node.
pub struct AnchorBlock<'a> {
    node: ElementRef<'a>,
    text: String,
}

impl<'a> AnchorBlock<'a> {
    pub fn new(node: ElementRef<'a>) -> Self {
        Self {
            text: flat_text(&node),
            node,
        }
    }
}

/// A named field heuristic over an anchor block.
type BlockRule = (&'static str, for<'r, 'a> fn(&'r AnchorBlock<'a>) -> Option<String>);

const RENT_RULES: &[BlockRule] = &[("man_yen_amount", rent_in_text)];
const AREA_RULES: &[BlockRule] = &[("square_meters", area_in_text)];
const STATION_RULES: &[BlockRule] = &[
    ("line_station_walk", station_on_line),
    ("operator_station_walk", station_with_operator),
];
const LOCATION_RULES: &[BlockRule] = &[
    ("table_cell", location_in_cells),
    ("address_in_text", location_in_text),
];
const TITLE_RULES: &[BlockRule] = &[
    ("inner_link", title_from_inner_links),
    ("rent_marker", title_after_marker),
];
const DESCRIPTION_RULES: &[BlockRule] = &[("paragraph", description_from_paragraphs)];

pub struct TableAnchorExtractor {
    label: &'static str,
    base_url: String,
}

impl TableAnchorExtractor {
    pub fn new(label: &'static str, base_url: impl Into<String>) -> Self {
        Self {
            label,
            base_url: base_url.into(),
        }
    }
}

impl ListingExtractor for TableAnchorExtractor {
    fn label(&self) -> &'static str {
        self.label
    }

    fn item_selector(&self) -> &Selector {
        &ANCHOR
    }

    fn accepts(&self, node: &ElementRef) -> bool {
        node.value()
            .attr("href")
            .is_some_and(|href| DETAIL_HREF.is_match(href))
    }

    fn extract(&self, node: ElementRef) -> Result<Option<Listing>, ScraperError> {
        let href = node.value().attr("href").unwrap_or_default();
        let Some(id) = LISTING_KEY.captures(href).map(|c| c[1].to_string()) else {
            return Ok(None);
        };

        let block = AnchorBlock::new(node);
        let field = |name: &str, rules: &[BlockRule]| {
            first_match(name, &block, rules).unwrap_or_default()
        };

        let mut listing = Listing::new(id, format!("{}{}", self.base_url, href))
            .with_title(field("title", TITLE_RULES));
        listing.rent = field("rent", RENT_RULES);
        listing.area = field("area", AREA_RULES);
        listing.station = field("station", STATION_RULES);
        listing.location = field("location", LOCATION_RULES);
        listing.description = field("description", DESCRIPTION_RULES);

        Ok(Some(listing))
    }
}

fn rent_in_text(block: &AnchorBlock) -> Option<String> {
    RENT.find(&block.text).map(|m| m.as_str().to_string())
}

fn area_in_text(block: &AnchorBlock) -> Option<String> {
    AREA.find(&block.text).map(|m| m.as_str().to_string())
}

fn station_on_line(block: &AnchorBlock) -> Option<String> {
    STATION_ON_LINE.find(&block.text).map(|m| m.as_str().to_string())
}

fn station_with_operator(block: &AnchorBlock) -> Option<String> {
    STATION_WITH_OPERATOR
        .find(&block.text)
        .map(|m| m.as_str().to_string())
}

/// A short piece of text naming a ward/city/town and nothing else we know of.
pub fn looks_like_location(text: &str) -> bool {
    ADMIN_UNIT.is_match(text)
        && !text.contains(RENT_UNIT)
        && !text.contains(STATION_MARK)
        && !text.contains(WALK_MARK)
        && char_len(text) < MAX_LOCATION_CHARS
}

fn location_in_cells(block: &AnchorBlock) -> Option<String> {
    block
        .node
        .select(&TABLE_CELL)
        .map(|cell| compact_text(&cell))
        .find(|text| looks_like_location(text))
}

// Only the first address-shaped match is considered.
fn location_in_text(block: &AnchorBlock) -> Option<String> {
    ADDRESS
        .find(&block.text)
        .map(|m| m.as_str())
        .filter(|loc| looks_like_location(loc))
        .map(str::to_string)
}

fn title_len_ok(text: &str) -> bool {
    let len = char_len(text);
    MIN_TITLE_CHARS < len && len < MAX_TITLE_CHARS
}

// The HTML parser only keeps an <a> nested inside the block when it sits in a
// table cell. Anywhere else the outer anchor is closed before the inner one
// opens, so the block comes out empty and every field falls back.
fn title_from_inner_links(block: &AnchorBlock) -> Option<String> {
    block
        .node
        .select(&ANCHOR)
        .filter(|a| a.value().attr("href").is_some_and(|h| DETAIL_HREF.is_match(h)))
        .map(|a| compact_text(&a))
        .find(|text| title_len_ok(text) && !text.contains(RENT_UNIT) && !text.contains(AREA_UNIT))
}

// Some result blocks render an English "rent" label directly before the
// building name; take the next token after it.
fn title_after_marker(block: &AnchorBlock) -> Option<String> {
    let idx = block.text.find(TITLE_MARKER)?;
    let after = block.text[idx + TITLE_MARKER.len()..].trim();
    after
        .split_whitespace()
        .next()
        .filter(|word| title_len_ok(word))
        .map(str::to_string)
}

fn description_from_paragraphs(block: &AnchorBlock) -> Option<String> {
    block
        .node
        .select(&PARAGRAPH)
        .map(|p| compact_text(&p))
        .find(|text| char_len(text) > MIN_DESCRIPTION_CHARS)
        .map(|text| truncate_chars(&text, MAX_DESCRIPTION_CHARS))
}
