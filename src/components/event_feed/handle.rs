use super::actor::{EventFeedActor, EventFeedActorHandle, FetchResult};
use crate::config::Config;
use crate::error::DashResult;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handle for interacting with the event feed actor
#[derive(Clone)]
pub struct EventFeedHandle {
    actor_handle: EventFeedActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl EventFeedHandle {
    /// Create a new EventFeedHandle and spawn the actor
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        let (mut actor, handle) = EventFeedActor::new(config);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Fetch the raw event records
    pub async fn fetch_events(&self) -> FetchResult {
        self.actor_handle.fetch_events().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> DashResult<()> {
        self.actor_handle.shutdown().await
    }
}
