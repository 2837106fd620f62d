use super::models::TrafficSnapshot;
use crate::config::Config;
use crate::error::{traffic_error, DashResult};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

/// Handle for fetching traffic snapshots
#[derive(Clone)]
pub struct TrafficFeedHandle {
    config: Arc<RwLock<Config>>,
    client: Client,
}

impl TrafficFeedHandle {
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch the current snapshot; `None` when no endpoint is configured
    pub async fn fetch_snapshot(&self) -> DashResult<Option<TrafficSnapshot>> {
        let (url_str, api_key, timeout_secs) = {
            let config_read = self.config.read().await;
            (
                config_read.traffic_api_url.clone(),
                config_read.api_key.clone(),
                config_read.request_timeout_secs,
            )
        };

        let Some(url_str) = url_str else {
            return Ok(None);
        };

        let url = Url::parse(&url_str)
            .map_err(|e| traffic_error(&format!("Failed to parse URL: {}", e)))?;

        debug!("Fetching traffic snapshot from {}", url);

        let mut request = self.client.get(url).timeout(Duration::from_secs(timeout_secs));
        if let Some(key) = api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| traffic_error(&format!("Failed to fetch traffic: {}", e)))?;

        if !response.status().is_success() {
            return Err(traffic_error(&format!(
                "Failed to fetch traffic: HTTP {}",
                response.status()
            )));
        }

        let snapshot: TrafficSnapshot = response
            .json()
            .await
            .map_err(|e| traffic_error(&format!("Failed to parse traffic response: {}", e)))?;

        Ok(Some(snapshot))
    }
}
