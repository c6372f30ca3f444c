/// Render a date/time part, zero-padded to two digits when below 10
pub fn pad_part(value: u32) -> String {
    if value >= 10 {
        value.to_string()
    } else {
        format!("{:02}", value)
    }
}

/// Render the offset part, zero-padded to three digits when below 10.
///
/// Values from 10 upward are rendered as-is, so `50` stays `"50"`.
pub fn pad_offset(value: u32) -> String {
    if value >= 10 {
        value.to_string()
    } else {
        format!("{:03}", value)
    }
}
