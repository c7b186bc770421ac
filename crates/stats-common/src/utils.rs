//! Shared utility functions.

use crate::types::TableDatum;
use chrono::{DateTime, TimeZone, Utc};

/// Formats a timestamp for display.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Converts milliseconds since the epoch into a UTC timestamp.
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn timestamp_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Renders rows as a two-column, left aligned text table.
pub fn render_table(rows: &[TableDatum]) -> String {
    let width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|row| format!("{:<width$}  {}\n", row.label, row.value))
        .collect()
}
