// Export components
pub mod economic_calendar;

// Re-export the calendar client
pub use economic_calendar::CalendarClient;
