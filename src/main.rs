use crate::config::Config;
use crate::db::SnapshotStore;
use crate::notify::{ConsoleSink, LineNotifier, NotificationSink};
use crate::scraper::SourceClient;
use crate::watcher::Watcher;
use std::process::ExitCode;

mod config;
mod db;
mod domain;
mod logging;
mod notify;
mod scraper;
mod watcher;

#[cfg(test)]
mod tests;

fn main() -> ExitCode {
    let config = Config::from_env();
    logging::init_logging(&config.log_level);

    tracing::info!("{}", "=".repeat(50));
    tracing::info!(
        started_at = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "estate watcher started"
    );

    let client = match SourceClient::new(config.http_timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let sink: Box<dyn NotificationSink> = match config.line.as_ref().map(LineNotifier::new) {
        Some(Ok(line)) => Box::new(line),
        Some(Err(e)) => {
            tracing::error!(error = %e, "failed to set up LINE notifier");
            Box::new(ConsoleSink)
        }
        None => Box::new(ConsoleSink),
    };

    let store = SnapshotStore::new(&config.data_dir);
    let watcher = Watcher::new(&client, &store, sink.as_ref());
    let any_ok = watcher.run_all(&config);

    tracing::info!("{}", "=".repeat(50));
    tracing::info!("watch finished");

    if any_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
