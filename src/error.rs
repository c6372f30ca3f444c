use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the calendar client
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    #[diagnostic(code(economic_calendar::http))]
    Http(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    #[diagnostic(code(economic_calendar::json))]
    Json(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    #[diagnostic(code(economic_calendar::url))]
    Url(#[from] url::ParseError),

    #[error("Environment error: {0}")]
    #[diagnostic(code(economic_calendar::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(economic_calendar::config))]
    Config(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(economic_calendar::serialization))]
    Serialization(String),

    #[error("Cannot build table: {0}")]
    #[diagnostic(code(economic_calendar::table))]
    Table(String),

    #[error(transparent)]
    #[diagnostic(code(economic_calendar::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(economic_calendar::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type CalendarResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create table conversion errors
pub fn table_error(message: &str) -> Error {
    Error::Table(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
