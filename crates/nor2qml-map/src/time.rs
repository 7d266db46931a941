//! Text forms of times and real numbers in QuakeML.

use chrono::NaiveDate;

/// `YYYY-MM-DDTHH:MM:SSZ`. Seconds are truncated to whole seconds and
/// absent components are written as `00`.
pub fn format_time(date: NaiveDate, hour: Option<u8>, minute: Option<u8>, second: Option<f64>) -> String {
    let whole_seconds = second.map_or(0, |s| s.trunc() as u32);
    format!(
        "{}T{:02}:{:02}:{:02}Z",
        date.format("%Y-%m-%d"),
        hour.unwrap_or(0),
        minute.unwrap_or(0),
        whole_seconds
    )
}

/// `xs:double` text for a real value. Whole numbers keep one decimal
/// (`10.0`).
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "INF" } else { "-INF" }.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
