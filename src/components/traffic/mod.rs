mod handle;
pub mod models;

pub use handle::TrafficFeedHandle;
pub use models::TrafficSnapshot;

use crate::config::Config;
use crate::error::DashResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Traffic feed component backing the traffic card
#[derive(Default)]
pub struct TrafficFeed {
    handle: RwLock<Option<TrafficFeedHandle>>,
}

impl TrafficFeed {
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if the feed is configured
    pub async fn get_handle(&self) -> Option<TrafficFeedHandle> {
        self.handle.read().await.clone()
    }
}

#[async_trait]
impl super::Component for TrafficFeed {
    fn name(&self) -> &'static str {
        "traffic"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> DashResult<()> {
        if config.read().await.traffic_api_url.is_none() {
            info!("No TRAFFIC_API_URL configured, traffic card disabled");
            return Ok(());
        }

        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            *handle_lock = Some(TrafficFeedHandle::new(config));
        }
        Ok(())
    }

    async fn shutdown(&self) -> DashResult<()> {
        self.handle.write().await.take();
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
