// src/scraper/source.rs

use crate::config::{Config, SiteConfig};
use crate::scraper::ListingExtractor;
use crate::scraper::renov::LabeledSpanExtractor;
use crate::scraper::tokyo_r::TableAnchorExtractor;
use std::fmt;

// Rent 15-30万円, floor plans 1LDK(203) 2K(205) 2DK(302) 2LDK(303),
// equipment 0169, open listings only. Every other field is sent empty.
const RENOV_SEARCH_FORM: &[(&str, &str)] = &[
    ("price[]", "15"),
    ("price[]", "30"),
    ("cond_money_combo", "1"),
    ("b_area[]", "0"),
    ("b_area[]", "99999"),
    ("eki_walk", "0"),
    ("madori[]", "203"),
    ("madori[]", "205"),
    ("madori[]", "302"),
    ("madori[]", "303"),
    ("setsubi_cd[]", "0169"),
    ("state_check", "2"),
    ("city_cd", ""),
    ("pref_cd_all", ""),
    ("ensen_cd", ""),
    ("eki_cd", ""),
    ("sch_flg", ""),
    ("pref_cd1", ""),
    ("pref_cd2", ""),
    ("required_time", ""),
    ("required_time2", ""),
    ("transfer_num", ""),
    ("transfer_num2", ""),
    ("ekitan_eki_name", ""),
    ("ekitan_eki_name2", ""),
    ("freeword", ""),
    ("item_div", ""),
    ("state", "2"),
    ("eki_json_flg", ""),
    ("categoly", ""),
];

/// The two listing sites. Each one is tracked with its own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    TokyoR,
    Renov,
}

/// How a source's search result page is requested.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    Get {
        url: String,
    },
    PostForm {
        url: String,
        form: &'static [(&'static str, &'static str)],
    },
}

impl Source {
    pub const ALL: [Source; 2] = [Source::TokyoR, Source::Renov];

    pub fn label(self) -> &'static str {
        match self {
            Source::TokyoR => "東京R不動産",
            Source::Renov => "リノベ百貨店",
        }
    }

    pub fn snapshot_file(self) -> &'static str {
        match self {
            Source::TokyoR => "properties.json",
            Source::Renov => "renov_properties.json",
        }
    }

    pub fn site(self, config: &Config) -> &SiteConfig {
        match self {
            Source::TokyoR => &config.tokyo_r,
            Source::Renov => &config.renov,
        }
    }

    pub fn search_request(self, site: &SiteConfig) -> SearchRequest {
        match self {
            Source::TokyoR => SearchRequest::Get {
                url: site.search_url.clone(),
            },
            Source::Renov => SearchRequest::PostForm {
                url: site.search_url.clone(),
                form: RENOV_SEARCH_FORM,
            },
        }
    }

    pub fn extractor(self, site: &SiteConfig) -> Box<dyn ListingExtractor> {
        match self {
            Source::TokyoR => Box::new(TableAnchorExtractor::new(self.label(), site.base_url.clone())),
            Source::Renov => Box::new(LabeledSpanExtractor::new(self.label(), site.base_url.clone())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
