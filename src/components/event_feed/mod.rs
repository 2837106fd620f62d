mod actor;
mod handle;
pub mod models;

pub use actor::{parse_event_payload, FetchResult};
pub use handle::EventFeedHandle;
pub use models::{EventRecord, RawEventRecord};

use crate::config::Config;
use crate::error::DashResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Event feed component owning the fetch actor
#[derive(Default)]
pub struct EventFeed {
    handle: RwLock<Option<EventFeedHandle>>,
}

impl EventFeed {
    /// Create a new event feed component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<EventFeedHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

#[async_trait]
impl super::Component for EventFeed {
    fn name(&self) -> &'static str {
        "event_feed"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> DashResult<()> {
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            *handle_lock = Some(EventFeedHandle::new(config));
        }
        Ok(())
    }

    async fn shutdown(&self) -> DashResult<()> {
        let handle_lock = self.handle.read().await;
        if let Some(handle) = &*handle_lock {
            handle.shutdown().await?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
