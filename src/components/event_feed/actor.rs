use super::models::RawEventRecord;
use crate::config::Config;
use crate::error::{event_feed_error, DashResult};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info};
use url::Url;

/// Result of one fetch: `None` when the API had no data to give
pub type FetchResult = DashResult<Option<Vec<RawEventRecord>>>;

/// The event feed actor that processes messages
pub struct EventFeedActor {
    config: Arc<RwLock<Config>>,
    client: Client,
    command_rx: mpsc::Receiver<EventFeedCommand>,
}

/// Commands that can be sent to the event feed actor
pub enum EventFeedCommand {
    FetchEvents(mpsc::Sender<FetchResult>),
    Shutdown,
}

/// Handle for communicating with the event feed actor
#[derive(Clone)]
pub struct EventFeedActorHandle {
    command_tx: mpsc::Sender<EventFeedCommand>,
}

impl EventFeedActorHandle {
    /// Fetch the raw event records
    pub async fn fetch_events(&self) -> FetchResult {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(EventFeedCommand::FetchEvents(response_tx))
            .await
            .map_err(|e| event_feed_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| event_feed_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> DashResult<()> {
        let _ = self.command_tx.send(EventFeedCommand::Shutdown).await;
        Ok(())
    }
}

impl EventFeedActor {
    /// Create a new actor and return its handle
    pub fn new(config: Arc<RwLock<Config>>) -> (Self, EventFeedActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            config,
            client: Client::new(),
            command_rx,
        };

        let handle = EventFeedActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Event feed actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                EventFeedCommand::FetchEvents(response_tx) => {
                    // Each fetch runs on its own task so a slow request never
                    // holds back a newer one queued behind it
                    let config = Arc::clone(&self.config);
                    let client = self.client.clone();
                    tokio::spawn(async move {
                        let result = Self::fetch_events(config, client).await;
                        let _ = response_tx.send(result).await;
                    });
                }
                EventFeedCommand::Shutdown => {
                    info!("Event feed actor shutting down");
                    break;
                }
            }
        }

        info!("Event feed actor shut down");
    }

    /// Fetch the raw event records from the configured endpoint
    pub async fn fetch_events(config: Arc<RwLock<Config>>, client: Client) -> FetchResult {
        let (url_str, api_key, timeout_secs) = {
            let config_read = config.read().await;
            (
                config_read.events_api_url.clone(),
                config_read.api_key.clone(),
                config_read.request_timeout_secs,
            )
        };

        let url = Url::parse(&url_str)
            .map_err(|e| event_feed_error(&format!("Failed to parse URL: {}", e)))?;

        debug!("Fetching events from {}", url);

        let mut request = client.get(url).timeout(Duration::from_secs(timeout_secs));
        if let Some(key) = api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| event_feed_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(event_feed_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| event_feed_error(&format!("Failed to read events response: {}", e)))?;

        parse_event_payload(&body)
    }
}

/// Interpret an events response body.
///
/// Accepts a bare array, or an object carrying the array under `data`.
/// An empty body, `null`, or a missing/null `data` field yields `None`.
pub fn parse_event_payload(body: &str) -> FetchResult {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| event_feed_error(&format!("Failed to parse events response: {}", e)))?;

    let records = match value {
        Value::Null => return Ok(None),
        Value::Array(_) => value,
        Value::Object(mut object) => match object.remove("data") {
            None | Some(Value::Null) => return Ok(None),
            Some(data @ Value::Array(_)) => data,
            Some(_) => return Err(event_feed_error("Unexpected `data` field in events response")),
        },
        _ => return Err(event_feed_error("Unexpected events response shape")),
    };

    let records: Vec<RawEventRecord> = serde_json::from_value(records)
        .map_err(|e| event_feed_error(&format!("Failed to parse event records: {}", e)))?;

    Ok(Some(records))
}
