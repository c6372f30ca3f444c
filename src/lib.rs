pub mod components;
pub mod config;
pub mod error;
pub mod startup;
pub mod utils;

pub use components::economic_calendar::{CalendarClient, CalendarOutput, ReturnType};
pub use error::{CalendarResult, Error};
