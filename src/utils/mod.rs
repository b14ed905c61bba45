//! Display formatting helpers (status codes, dates, durations).

use chrono::{Local, TimeZone};

/// Display text plus CSS-style class for a result status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub text: String,
    pub class: &'static str,
}

/// Map a status code to its display form. Total: unknown codes pass
/// through verbatim and render as pending.
pub fn status_info(status: &str) -> StatusInfo {
    match status {
        "P" => StatusInfo { text: "Passed".to_string(), class: "status-passed" },
        "F" => StatusInfo { text: "Failed".to_string(), class: "status-failed" },
        "I" | "Ignored" => StatusInfo { text: "Ignored".to_string(), class: "status-ignored" },
        other => StatusInfo { text: other.to_string(), class: "status-pending" },
    }
}

/// Unix seconds to a local-timezone date-time string. Output depends
/// on the machine's timezone by design.
pub fn format_date_time(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

/// Milliseconds to seconds with exactly two decimals, e.g. `1500` ->
/// `"1.50s"`.
pub fn format_execution_time(millis: i64) -> String {
    format!("{:.2}s", millis as f64 / 1000.0)
}
