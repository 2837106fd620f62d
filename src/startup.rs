use crate::components::ComponentManager;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::error::{component_error, other_error, Error};
use crate::shutdown;
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging into `log_file`; the terminal is taken by the dashboard
pub fn init_logging(log_file: &str) -> miette::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(Error::from)?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Bring up the feed components and run the dashboard until it exits
pub async fn start_dashboard(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    // Set locale from config
    {
        let config_read = config.read().await;
        crate::utils::i18n::set_locale(&config_read.locale);
        info!("Setting locale to {}", config_read.locale);
    }

    // Initialize component manager
    let mut component_manager = ComponentManager::new(Arc::clone(&config));
    component_manager.register_enabled().await;
    component_manager.init_all().await?;
    let component_manager = Arc::new(component_manager);

    let events = component_manager
        .event_feed_handle()
        .await
        .ok_or_else(|| component_error("Event feed component is not enabled"))?;
    let traffic = component_manager.traffic_handle().await;
    if traffic.is_none() {
        info!("Traffic card disabled");
    }

    // Spawn signal handler task
    let shutdown_token = CancellationToken::new();
    tokio::spawn(shutdown::handle_signals(shutdown_token.clone()));

    info!("Starting dashboard...");
    let dashboard = Dashboard::new(Arc::clone(&config), events, traffic, shutdown_token.clone());
    let result = dashboard.run().await;

    // Stop the signal handler if the user quit
    shutdown_token.cancel();

    if let Err(e) = component_manager.shutdown_all().await {
        error!("Error shutting down components: {:?}", e);
    } else {
        info!("All components shut down successfully");
    }

    result.map_err(Into::into)
}
