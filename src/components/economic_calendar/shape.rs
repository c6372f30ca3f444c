use super::models::{CalendarOutput, ReturnType};
use super::table::Table;
use crate::error::CalendarResult;
use serde_json::Value;
use tracing::debug;

/// Reshape a parsed response according to the requested return type.
///
/// A missing `result`/`status` key or an unrecognized return type yields
/// `Ok(None)`. The only error is a scalar `result` that cannot be laid
/// out as a table.
pub fn shape_response(data: &Value, return_type: &ReturnType) -> CalendarResult<Option<CalendarOutput>> {
    debug!("Shaping calendar response as {}", return_type);

    let output = match return_type {
        ReturnType::Raw => Some(CalendarOutput::Raw(data.clone())),
        ReturnType::Records => data.get("result").cloned().map(CalendarOutput::Records),
        ReturnType::Status => data.get("status").cloned().map(CalendarOutput::Status),
        ReturnType::Table => match data.get("result") {
            Some(result) => Some(CalendarOutput::Table(Table::from_result(result)?)),
            None => None,
        },
        ReturnType::Unrecognized(_) => None,
    };

    Ok(output)
}
