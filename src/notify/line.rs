// src/notify/line.rs

use crate::config::LineConfig;
use crate::domain::Listing;
use crate::notify::{message, NotificationSink};
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

const LINE_PUSH_URL: &str = "https://api.line.me/v2/bot/message/push";
const LINE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {status} {body}")]
    ApiError { status: u16, body: String },
}

#[derive(Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Serialize)]
struct PushPayload<'a> {
    to: &'a str,
    messages: Vec<TextMessage<'a>>,
}

/// Pushes new-listing messages to one LINE user through the Messaging API.
pub struct LineNotifier {
    channel_access_token: String,
    user_id: String,
    endpoint: String,
    client: Client,
}

impl LineNotifier {
    pub fn new(config: &LineConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(LINE_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::RequestFailed(e.to_string()))?;

        Ok(Self {
            channel_access_token: config.channel_access_token.clone(),
            user_id: config.user_id.clone(),
            endpoint: LINE_PUSH_URL.to_string(),
            client,
        })
    }

    pub fn send_text(&self, text: &str) -> Result<(), NotifyError> {
        let text = message::truncate(text);
        let payload = PushPayload {
            to: &self.user_id,
            messages: vec![TextMessage {
                kind: "text",
                text: &text,
            }],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.channel_access_token)
            .json(&payload)
            .send()
            .map_err(|e| NotifyError::RequestFailed(e.to_string()))?;

        // LINE answers 200 on success; anything else is a failure.
        if resp.status() != reqwest::StatusCode::OK {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(NotifyError::ApiError { status, body });
        }

        Ok(())
    }
}

impl NotificationSink for LineNotifier {
    fn notify(&self, listings: &[Listing], site_name: &str) -> usize {
        if listings.is_empty() {
            return 0;
        }

        let batched = listings.len() > message::BATCH_THRESHOLD;
        let mut delivered = 0;

        for text in message::compose(listings, site_name) {
            match self.send_text(&text) {
                Ok(()) => {
                    tracing::info!(site = site_name, "LINE notification sent");
                    delivered += 1;
                }
                Err(e) => tracing::error!(site = site_name, error = %e, "LINE notification failed"),
            }
        }

        // A delivered summary covers every listing in it.
        if batched && delivered > 0 {
            listings.len()
        } else {
            delivered
        }
    }
}
