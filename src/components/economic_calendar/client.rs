use super::countries::build_country_filter;
use super::models::{CalendarOutput, QueryParams, ReturnType};
use super::shape::shape_response;
use super::time::{build_time_window, TimeWindow, TimeWindowInput};
use crate::error::CalendarResult;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// TradingView economic calendar endpoint
pub const DEFAULT_ENDPOINT: &str = "https://economic-calendar.tradingview.com/events";

/// Parsed [`DEFAULT_ENDPOINT`]
pub(crate) fn default_endpoint() -> Url {
    // constant URL
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

/// Append the `from`/`to`/`countries` query to an endpoint
pub(crate) fn build_request_url(endpoint: &Url, window: &TimeWindow, countries: &[String]) -> Url {
    let params = QueryParams::new(window, countries);
    let mut url = endpoint.clone();
    url.query_pairs_mut().extend_pairs(params.pairs());
    url
}

/// Client for the economic calendar endpoint.
///
/// Holds no per-request state, so one instance can serve concurrent calls.
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

    /// Full request URL for the given window and countries
    pub fn request_url(&self, window: &TimeWindow, countries: &[String]) -> Url {
        build_request_url(&self.endpoint, window, countries)
    }

    /// Fetch the events for a window and return the parsed body as-is.
    ///
    /// The HTTP status is not inspected: any body that parses as JSON is
    /// returned. Transport and parse failures are returned to the caller.
    pub async fn fetch_raw(&self, window: &TimeWindow, countries: &[String]) -> CalendarResult<Value> {
        let url = self.request_url(window, countries);
        debug!("Requesting economic calendar: {}", url);

        let body = self.client.get(url).send().await?.text().await?;
        let data = serde_json::from_str(&body)?;

        Ok(data)
    }

    /// Resolve the inputs, fetch the events and shape the response.
    ///
    /// `None` for `countries` (or an empty list) selects the default
    /// country list.
    pub async fn get_calendar(
        &self,
        window: &TimeWindowInput,
        countries: Option<&[String]>,
        return_type: &ReturnType,
    ) -> CalendarResult<Option<CalendarOutput>> {
        let window = build_time_window(window);
        let countries = build_country_filter(countries);

        let data = self.fetch_raw(&window, &countries).await?;
        shape_response(&data, return_type)
    }
}

impl Default for CalendarClient {
    fn default() -> Self {
        Self::new()
    }
}
