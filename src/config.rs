// src/config.rs

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const TOKYO_R_SEARCH_URL: &str = "https://www.realtokyoestate.co.jp/estate_search.php\
    ?mode=key&display=inline&type%5B%5D=1&k=&type2%5B%5D=1\
    &rent_from=15&rent_to=30&building_area_from=40&building_area_to=0";
pub const TOKYO_R_BASE_URL: &str = "https://www.realtokyoestate.co.jp";
pub const RENOV_SEARCH_URL: &str = "https://www.renov-depart.jp/rent/search/";
pub const RENOV_BASE_URL: &str = "https://www.renov-depart.jp";

/// Where one listing site is fetched from and how its relative links resolve.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub search_url: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct LineConfig {
    pub channel_access_token: String,
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub http_timeout: Duration,
    pub log_level: String,
    /// `None` unless both the token and the user id are set.
    pub line: Option<LineConfig>,
    pub tokyo_r: SiteConfig,
    pub renov: SiteConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let line = match (
            non_empty_var("LINE_CHANNEL_ACCESS_TOKEN"),
            non_empty_var("LINE_USER_ID"),
        ) {
            (Some(channel_access_token), Some(user_id)) => Some(LineConfig {
                channel_access_token,
                user_id,
            }),
            _ => None,
        };

        Config {
            data_dir: non_empty_var("ESTATE_WATCHER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            line,
            tokyo_r: SiteConfig {
                search_url: env::var("TOKYO_R_SEARCH_URL")
                    .unwrap_or_else(|_| TOKYO_R_SEARCH_URL.to_string()),
                base_url: env::var("TOKYO_R_BASE_URL")
                    .unwrap_or_else(|_| TOKYO_R_BASE_URL.to_string()),
            },
            renov: SiteConfig {
                search_url: env::var("RENOV_SEARCH_URL")
                    .unwrap_or_else(|_| RENOV_SEARCH_URL.to_string()),
                base_url: env::var("RENOV_BASE_URL")
                    .unwrap_or_else(|_| RENOV_BASE_URL.to_string()),
            },
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
