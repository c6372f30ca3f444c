use super::table::Table;
use super::time::TimeWindow;
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Query string sent with the events request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub from: String,
    pub to: String,
    pub countries: String,
}

impl QueryParams {
    /// Build parameters from a resolved window and country filter
    pub fn new(window: &TimeWindow, countries: &[String]) -> Self {
        Self {
            from: window.from.clone(),
            to: window.to.clone(),
            countries: countries.join(","),
        }
    }

    /// Key/value pairs in the order they are appended to the URL
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("from", self.from.as_str()),
            ("to", self.to.as_str()),
            ("countries", self.countries.as_str()),
        ]
    }
}

/// Requested output shape
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReturnType {
    /// Events under `result`
    #[default]
    Records,
    /// The whole response object
    Raw,
    /// Events under `result` as a table
    Table,
    /// The `status` field
    Status,
    /// Anything else, which always shapes to nothing
    Unrecognized(String),
}

impl FromStr for ReturnType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "records" => ReturnType::Records,
            "raw" => ReturnType::Raw,
            "pandas" | "table" => ReturnType::Table,
            "status" => ReturnType::Status,
            other => ReturnType::Unrecognized(other.to_string()),
        })
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Records => write!(f, "records"),
            ReturnType::Raw => write!(f, "raw"),
            ReturnType::Table => write!(f, "table"),
            ReturnType::Status => write!(f, "status"),
            ReturnType::Unrecognized(s) => write!(f, "{}", s),
        }
    }
}

/// Shaped calendar response
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarOutput {
    Raw(Value),
    Records(Value),
    Status(Value),
    Table(Table),
}

impl CalendarOutput {
    /// JSON view of the output; tables become a list of records
    pub fn to_json(&self) -> Value {
        match self {
            CalendarOutput::Raw(v) | CalendarOutput::Records(v) | CalendarOutput::Status(v) => v.clone(),
            CalendarOutput::Table(table) => Value::Array(table.to_records()),
        }
    }
}
