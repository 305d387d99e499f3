// src/watcher.rs

use crate::config::{Config, SiteConfig};
use crate::db::SnapshotStore;
use crate::domain::find_new_listings;
use crate::notify::NotificationSink;
use crate::scraper::{collect_listings, FetchDocument, ScraperError, Source};

/// What one source's run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub source: Source,
    pub fetched: usize,
    pub new: usize,
    pub notified: usize,
}

pub struct Watcher<'a> {
    fetcher: &'a dyn FetchDocument,
    store: &'a SnapshotStore,
    sink: &'a dyn NotificationSink,
}

impl<'a> Watcher<'a> {
    pub fn new(
        fetcher: &'a dyn FetchDocument,
        store: &'a SnapshotStore,
        sink: &'a dyn NotificationSink,
    ) -> Self {
        Self {
            fetcher,
            store,
            sink,
        }
    }

    /// Fetch, extract, diff against the saved snapshot, notify, save.
    ///
    /// Only the fetch can fail the run. A page with no listings is a
    /// completed run like any other: nothing is new and the saved snapshot
    /// is replaced with the empty collection.
    pub fn run(&self, source: Source, site: &SiteConfig) -> Result<RunReport, ScraperError> {
        tracing::info!("{}", "-".repeat(30));
        tracing::info!(%source, "watch started");

        let html = self.fetcher.fetch(&source.search_request(site))?;
        let extractor = source.extractor(site);
        let current = collect_listings(&html, extractor.as_ref());

        let mut report = RunReport {
            source,
            fetched: current.len(),
            new: 0,
            notified: 0,
        };

        if current.is_empty() {
            tracing::warn!(%source, "no listings found on the page");
        }

        let prior = self.store.load(source);
        tracing::info!(%source, saved = prior.len(), "loaded saved listings");

        let new_listings = find_new_listings(&current, &prior);
        report.new = new_listings.len();

        if new_listings.is_empty() {
            tracing::info!(%source, "no new listings");
        } else {
            tracing::info!(%source, count = new_listings.len(), "new listings detected");
            for listing in &new_listings {
                tracing::info!("  - {}", listing.summary());
            }
            report.notified = self.sink.notify(&new_listings, source.label());
            tracing::info!(%source, notified = report.notified, "notifications delivered");
        }

        self.store.save(source, &current);
        Ok(report)
    }

    /// Runs every source independently. Returns true if at least one source
    /// completed without a fetch error.
    pub fn run_all(&self, config: &Config) -> bool {
        let mut any_ok = false;
        for source in Source::ALL {
            match self.run(source, source.site(config)) {
                Ok(report) => {
                    any_ok = true;
                    tracing::info!(
                        source = %report.source,
                        fetched = report.fetched,
                        new = report.new,
                        notified = report.notified,
                        "watch finished"
                    );
                }
                Err(e) => tracing::warn!(%source, error = %e, "watch failed, skipping until the next run"),
            }
        }
        any_ok
    }
}
