use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("HTTP error: {0}")]
    #[diagnostic(code(eventboard::http))]
    Http(#[from] reqwest::Error),

    #[error("Environment error: {0}")]
    #[diagnostic(code(eventboard::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(eventboard::config))]
    Config(String),

    #[error("Event feed error: {0}")]
    #[diagnostic(code(eventboard::event_feed))]
    EventFeed(String),

    #[error("Traffic feed error: {0}")]
    #[diagnostic(code(eventboard::traffic))]
    Traffic(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(eventboard::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(eventboard::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(eventboard::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(eventboard::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for JSON errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type DashResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create event feed errors
pub fn event_feed_error(message: &str) -> Error {
    Error::EventFeed(message.to_string())
}

/// Helper to create traffic feed errors
pub fn traffic_error(message: &str) -> Error {
    Error::Traffic(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
