use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Extraction failed for {source_label}: {reason}")]
    Extraction {
        source_label: &'static str,
        reason: String,
    },
}
