use crate::error::{config_error, env_error, DashResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Default UI tick in milliseconds (drives title scrolling)
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
/// Default log file; the terminal itself belongs to the dashboard
pub const DEFAULT_LOG_FILE: &str = "eventboard.log";
/// Default locale for user-visible strings
pub const DEFAULT_LOCALE: &str = "en";

const COMPONENTS_FILE: &str = "config/components.toml";

/// Main configuration structure for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint returning the raw event records
    pub events_api_url: String,
    /// Optional endpoint returning the traffic snapshot
    pub traffic_api_url: Option<String>,
    /// Optional bearer token sent with every request
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// UI tick interval in milliseconds
    pub tick_rate_ms: u64,
    /// Locale used for user-visible strings
    pub locale: String,
    /// File that receives log output
    pub log_file: String,
    /// Map of component names to their enabled status
    pub components: HashMap<String, bool>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> DashResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let events_api_url = env::var("EVENTS_API_URL").map_err(|_| env_error("EVENTS_API_URL"))?;
        let traffic_api_url = optional_var("TRAFFIC_API_URL");
        let api_key = optional_var("EVENTS_API_KEY");

        let request_timeout_secs =
            parse_number("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let tick_rate_ms = parse_number("TICK_RATE_MS", DEFAULT_TICK_RATE_MS)?;

        let locale = env::var("DASHBOARD_LOCALE").unwrap_or_else(|_| String::from(DEFAULT_LOCALE));
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| String::from(DEFAULT_LOG_FILE));

        let mut components = Self::default_components();

        // Load components configuration from file if it exists
        if let Ok(content) = fs::read_to_string(COMPONENTS_FILE) {
            merge_components(&mut components, &content)?;
        }

        Ok(Config {
            events_api_url,
            traffic_api_url,
            api_key,
            request_timeout_secs,
            tick_rate_ms,
            locale,
            log_file,
            components,
        })
    }

    /// Config pointing at the given events endpoint, everything else defaulted
    pub fn for_endpoint(events_api_url: impl Into<String>) -> Self {
        Config {
            events_api_url: events_api_url.into(),
            traffic_api_url: None,
            api_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            locale: DEFAULT_LOCALE.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            components: Self::default_components(),
        }
    }

    /// Check if a component is enabled
    pub fn is_component_enabled(&self, name: &str) -> bool {
        *self.components.get(name).unwrap_or(&false)
    }

    fn default_components() -> HashMap<String, bool> {
        let mut components = HashMap::new();
        components.insert("event_feed".to_string(), true);
        components.insert("traffic".to_string(), true);
        components
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_number(name: &str, default: u64) -> DashResult<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| config_error(&format!("Invalid {} value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

/// Merge component toggles from TOML content over the defaults
fn merge_components(components: &mut HashMap<String, bool>, content: &str) -> DashResult<()> {
    let file_components = toml::from_str::<HashMap<String, bool>>(content)?;
    for (key, value) in file_components {
        components.insert(key, value);
    }
    Ok(())
}
