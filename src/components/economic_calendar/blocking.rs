//! Synchronous calendar client on top of `reqwest::blocking`.
//!
//! Calls block the current thread. Like `reqwest::blocking` itself, this
//! client must not be used from inside an async runtime.

use super::client::{build_request_url, default_endpoint};
use super::countries::build_country_filter;
use super::models::{CalendarOutput, ReturnType};
use super::shape::shape_response;
use super::time::{build_time_window, TimeWindow, TimeWindowInput};
use crate::error::CalendarResult;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Blocking client for the economic calendar endpoint
#[derive(Debug, Clone)]
pub struct CalendarClient {
    client: Client,
    endpoint: Url,
}

impl CalendarClient {
    /// Create a client for the TradingView endpoint
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: default_endpoint(),
        }
    }

    /// Create a client for another endpoint, e.g. a mock server
    pub fn with_endpoint(endpoint: &str) -> CalendarResult<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Blocking version of the async `fetch_raw`
    pub fn fetch_raw(&self, window: &TimeWindow, countries: &[String]) -> CalendarResult<Value> {
        let url = build_request_url(&self.endpoint, window, countries);
        debug!("Requesting economic calendar: {}", url);

        let body = self.client.get(url).send()?.text()?;
        let data = serde_json::from_str(&body)?;

        Ok(data)
    }

    /// Blocking version of the async `get_calendar`
    pub fn get_calendar(
        &self,
        window: &TimeWindowInput,
        countries: Option<&[String]>,
        return_type: &ReturnType,
    ) -> CalendarResult<Option<CalendarOutput>> {
        let window = build_time_window(window);
        let countries = build_country_filter(countries);

        let data = self.fetch_raw(&window, &countries)?;
        shape_response(&data, return_type)
    }
}

impl Default for CalendarClient {
    fn default() -> Self {
        Self::new()
    }
}
