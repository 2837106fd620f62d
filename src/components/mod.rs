use crate::config::Config;
use crate::error::DashResult;
use async_trait::async_trait;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// Export components
pub mod event_feed;
pub mod traffic;

pub use event_feed::{EventFeed, EventFeedHandle};
pub use traffic::{TrafficFeed, TrafficFeedHandle};

/// Component trait that all components must implement
#[async_trait]
pub trait Component: Send + Sync + Any {
    /// Get the name of the component
    fn name(&self) -> &'static str;

    /// Initialize the component
    async fn init(&self, config: Arc<RwLock<Config>>) -> DashResult<()>;

    /// Shutdown the component
    async fn shutdown(&self) -> DashResult<()>;

    /// Convert to Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Manager for all components
pub struct ComponentManager {
    components: Vec<Box<dyn Component>>,
    config: Arc<RwLock<Config>>,
}

impl fmt::Debug for ComponentManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentManager")
            .field("component_count", &self.components.len())
            .field("config", &self.config)
            .finish()
    }
}

impl ComponentManager {
    /// Create a new component manager
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            components: Vec::new(),
            config,
        }
    }

    /// Register a component
    pub fn register<T: Component + 'static>(&mut self, component: T) {
        info!("Registering component: {}", component.name());
        self.components.push(Box::new(component));
    }

    /// Register the default components that the config enables
    pub async fn register_enabled(&mut self) {
        let (event_feed, traffic) = {
            let config = self.config.read().await;
            (
                config.is_component_enabled("event_feed"),
                config.is_component_enabled("traffic"),
            )
        };

        if event_feed {
            self.register(EventFeed::new());
        }
        if traffic {
            self.register(TrafficFeed::new());
        }
    }

    /// Initialize all registered components
    pub async fn init_all(&self) -> DashResult<()> {
        for component in &self.components {
            info!("Initializing component: {}", component.name());

            if let Err(e) = component.init(Arc::clone(&self.config)).await {
                // Log error but continue with other components
                tracing::error!("Error initializing component {}: {:?}", component.name(), e);
            }
        }

        Ok(())
    }

    /// Shutdown all components
    pub async fn shutdown_all(&self) -> DashResult<()> {
        info!("Shutting down all components");

        for component in &self.components {
            info!("Shutting down component: {}", component.name());

            if let Err(e) = component.shutdown().await {
                // Log error but continue with other components
                tracing::error!(
                    "Error shutting down component {}: {:?}",
                    component.name(),
                    e
                );
            }
        }

        Ok(())
    }

    /// Get a component by name
    pub fn get_component_by_name(&self, name: &str) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Get a registered component by its concrete type
    pub fn get<T: Component + 'static>(&self, name: &str) -> Option<&T> {
        self.get_component_by_name(name)
            .and_then(|component| component.as_any().downcast_ref::<T>())
    }

    /// Event feed handle, if the component is registered and initialized
    pub async fn event_feed_handle(&self) -> Option<EventFeedHandle> {
        match self.get::<EventFeed>("event_feed") {
            Some(feed) => feed.get_handle().await,
            None => None,
        }
    }

    /// Traffic feed handle, if the component is registered and configured
    pub async fn traffic_handle(&self) -> Option<TrafficFeedHandle> {
        match self.get::<TrafficFeed>("traffic") {
            Some(feed) => feed.get_handle().await,
            None => None,
        }
    }
}
