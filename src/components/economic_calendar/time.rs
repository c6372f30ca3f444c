use crate::utils::time::{pad_offset, pad_part};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Structured date/time used when no ISO string is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
    pub offset: u32,
}

impl DateTimeFields {
    /// Format as `{year}-{month}-{day}T{hour}:{min}:{sec}.{offset}Z`.
    ///
    /// Parts below 10 are padded to two digits, the offset to three. The
    /// year is never padded.
    pub fn to_timestamp(&self) -> String {
        format!(
            "{}-{}-{}T{}:{}:{}.{}Z",
            self.year,
            pad_part(self.month),
            pad_part(self.day),
            pad_part(self.hour),
            pad_part(self.min),
            pad_part(self.sec),
            pad_offset(self.offset),
        )
    }
}

/// Requested window, one optional ISO string and one optional field set per end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeWindowInput {
    pub from_iso: Option<String>,
    pub to_iso: Option<String>,
    pub from_fields: Option<DateTimeFields>,
    pub to_fields: Option<DateTimeFields>,
}

impl TimeWindowInput {
    /// Window given directly as ISO-8601 strings
    pub fn from_iso(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from_iso: Some(from.into()),
            to_iso: Some(to.into()),
            ..Default::default()
        }
    }

    /// Window given as structured field sets
    pub fn from_fields(from: DateTimeFields, to: DateTimeFields) -> Self {
        Self {
            from_fields: Some(from),
            to_fields: Some(to),
            ..Default::default()
        }
    }
}

/// Resolved `from`/`to` timestamps sent to the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: String,
    pub to: String,
}

/// Resolve the window against the current UTC date
pub fn build_time_window(input: &TimeWindowInput) -> TimeWindow {
    build_time_window_at(Utc::now(), input)
}

/// Resolve the window against a given instant.
///
/// Per end: a non-empty ISO string wins, then the field set, then the
/// start (`from`) or end (`to`) of the day of `now`.
pub fn build_time_window_at(now: DateTime<Utc>, input: &TimeWindowInput) -> TimeWindow {
    let from = resolve_end(
        input.from_iso.as_deref(),
        input.from_fields.as_ref(),
        now,
        "%Y-%m-%dT00:00:00.000Z",
    );
    let to = resolve_end(
        input.to_iso.as_deref(),
        input.to_fields.as_ref(),
        now,
        "%Y-%m-%dT23:59:59.000Z",
    );

    TimeWindow { from, to }
}

fn resolve_end(
    iso: Option<&str>,
    fields: Option<&DateTimeFields>,
    now: DateTime<Utc>,
    default_format: &str,
) -> String {
    // Empty strings count as absent
    match (iso.filter(|s| !s.is_empty()), fields) {
        (Some(iso), _) => iso.to_string(),
        (None, Some(fields)) => fields.to_timestamp(),
        (None, None) => now.format(default_format).to_string(),
    }
}
