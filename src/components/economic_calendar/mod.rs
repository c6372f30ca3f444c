pub mod blocking;
mod client;
pub mod countries;
pub mod models;
mod shape;
pub mod table;
pub mod time;

pub use client::{CalendarClient, DEFAULT_ENDPOINT};
pub use countries::{build_country_filter, DEFAULT_COUNTRY_CODES, SUPPORTED_COUNTRY_CODES};
pub use models::{CalendarOutput, QueryParams, ReturnType};
pub use shape::shape_response;
pub use table::Table;
pub use time::{build_time_window, build_time_window_at, DateTimeFields, TimeWindow, TimeWindowInput};
