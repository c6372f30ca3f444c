use crate::components::economic_calendar::{ReturnType, TimeWindowInput, DEFAULT_ENDPOINT};
use crate::error::{config_error, env_error, CalendarResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env::{self, VarError};
use std::fs;
use std::io::ErrorKind;
use url::Url;

/// Optional TOML file read on startup
pub const CONFIG_FILE: &str = "config/calendar.toml";

/// Return type used when none is configured
pub const DEFAULT_RETURN_TYPE: &str = "records";

/// Settings for one calendar run of the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Events endpoint URL
    pub endpoint: String,
    /// Window start as ISO-8601, today when unset
    pub from: Option<String>,
    /// Window end as ISO-8601, today when unset
    pub to: Option<String>,
    /// Country codes to request, the default list when empty
    pub countries: Vec<String>,
    /// Output shape (`records`, `raw`, `table`/`pandas`, `status`)
    pub return_type: String,
}

/// Values that may be set in the config file
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    endpoint: Option<String>,
    from: Option<String>,
    to: Option<String>,
    countries: Option<Vec<String>>,
    return_type: Option<String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> CalendarResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let file = match fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Self::from_sources(|name| env::var(name), file.as_deref())
    }

    /// Build configuration from an environment lookup and optional file
    /// contents. Environment values win over the file.
    pub fn from_sources<F>(lookup: F, file: Option<&str>) -> CalendarResult<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let file: FileConfig = match file {
            Some(content) => toml::from_str(content)?,
            None => FileConfig::default(),
        };

        let var = |name: &str| -> CalendarResult<Option<String>> {
            match lookup(name) {
                Ok(value) if value.trim().is_empty() => Ok(None),
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(env_error(name)),
            }
        };

        let endpoint = var("ECONOMIC_CALENDAR_URL")?
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Url::parse(&endpoint)
            .map_err(|e| config_error(&format!("Invalid endpoint '{}': {}", endpoint, e)))?;

        let from = var("CALENDAR_FROM")?.or(file.from);
        let to = var("CALENDAR_TO")?.or(file.to);

        let countries = match var("CALENDAR_COUNTRIES")? {
            Some(list) => parse_country_list(&list),
            None => file.countries.unwrap_or_default(),
        };

        let return_type = var("CALENDAR_RETURN_TYPE")?
            .or(file.return_type)
            .unwrap_or_else(|| DEFAULT_RETURN_TYPE.to_string());

        Ok(Config {
            endpoint,
            from,
            to,
            countries,
            return_type,
        })
    }

    /// Window input built from the configured ISO strings
    pub fn window_input(&self) -> TimeWindowInput {
        TimeWindowInput {
            from_iso: self.from.clone(),
            to_iso: self.to.clone(),
            ..Default::default()
        }
    }

    /// Configured country codes, `None` when the default list applies
    pub fn country_filter(&self) -> Option<&[String]> {
        if self.countries.is_empty() {
            None
        } else {
            Some(self.countries.as_slice())
        }
    }

    /// Parsed output shape
    pub fn return_type(&self) -> ReturnType {
        match self.return_type.parse() {
            Ok(return_type) => return_type,
            Err(never) => match never {},
        }
    }
}

/// Split a comma separated list of country codes
fn parse_country_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}
