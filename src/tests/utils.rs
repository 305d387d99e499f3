use crate::config::{Config, SiteConfig};
use crate::domain::Listing;
use crate::notify::NotificationSink;
use crate::scraper::{FetchDocument, ScraperError, SearchRequest};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const TOKYO_R_SEARCH: &str = "https://tokyo-r.test/search";
pub const RENOV_SEARCH: &str = "https://renov.test/search";

/// A results page in the shape of Source A.
pub const TOKYO_R_PAGE: &str = r#"<html><body>
<div class="result">
  <a href="/estate.php?n=1001">
    <table><tr>
      <td>渋谷区 徒歩5分</td>
      <td>渋谷区神南</td>
      <td><a href="/estate.php?n=1001">神南のアトリエ</a></td>
    </tr></table>
    21万5,000～53万円 40.04㎡ 山手線「渋谷」駅 徒歩5分
  </a>
  <a href="/estate.php?n=1002">
    <table><tr><td>目黒区青葉台</td></tr></table>
    18万円 45.5㎡ 東急東横「代官山」駅 徒歩3分
  </a>
  <a href="/estate.php?n=1001">もう一度同じ物件 99万円</a>
  <a href="/estate.php">番号なし</a>
  <a href="/about.php">会社概要</a>
</div>
</body></html>"#;

/// A results page in the shape of Source B.
pub const RENOV_PAGE: &str = r#"<html><body>
<div class="property-item">
  <a href="/detail/001/ka260120_2/"><img src="a.jpg"></a>
  <span class="title fnt-bold">目黒の光庭ハウス</span>
  <span class="place">東急東横線「中目黒」駅 徒歩6分</span>
  <span class="price">190,000円/5,300円 58.32㎡</span>
</div>
<div class="property-item">
  <a href="/detail/013/mx0002/">詳細</a>
  <span class="price">230,000円 62.1㎡</span>
</div>
<div class="property-item">
  <span class="title">リンクのない物件</span>
</div>
</body></html>"#;

pub fn test_config(data_dir: &Path) -> Config {
    Config {
        data_dir: data_dir.to_path_buf(),
        http_timeout: Duration::from_secs(1),
        log_level: "debug".to_string(),
        line: None,
        tokyo_r: SiteConfig {
            search_url: TOKYO_R_SEARCH.to_string(),
            base_url: "https://www.realtokyoestate.co.jp".to_string(),
        },
        renov: SiteConfig {
            search_url: RENOV_SEARCH.to_string(),
            base_url: "https://www.renov-depart.jp".to_string(),
        },
    }
}

/// Serves canned pages by URL; any other URL fails like a 503.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
}

impl StubFetcher {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

impl FetchDocument for StubFetcher {
    fn fetch(&self, request: &SearchRequest) -> Result<String, ScraperError> {
        let url = match request {
            SearchRequest::Get { url } | SearchRequest::PostForm { url, .. } => url,
        };
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Status {
                status: 503,
                url: url.clone(),
            })
    }
}

/// Records every batch it is given and reports them all as delivered.
#[derive(Default)]
pub struct RecordingSink {
    pub batches: RefCell<Vec<(String, Vec<Listing>)>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, listings: &[Listing], site_name: &str) -> usize {
        self.batches
            .borrow_mut()
            .push((site_name.to_string(), listings.to_vec()));
        listings.len()
    }
}
