//! Relative "time ago" labels for feed timestamps.

#[cfg(test)]
#[path = "time_ago_test.rs"]
mod time_ago_test;

const UNITS: [(&str, f64); 7] = [
    ("second", 60.0),
    ("minute", 60.0),
    ("hour", 24.0),
    ("day", 7.0),
    ("week", 365.0 / 7.0 / 12.0),
    ("month", 12.0),
    ("year", f64::INFINITY),
];

/// Label for something that happened `elapsed_secs` seconds ago.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn label_for_elapsed(elapsed_secs: f64) -> String {
    if !elapsed_secs.is_finite() || elapsed_secs < 10.0 {
        return "just now".to_owned();
    }
    let mut value = elapsed_secs;
    for (unit, size) in UNITS {
        if value < size {
            let n = value.floor() as u64;
            return if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") };
        }
        value /= size;
    }
    "just now".to_owned()
}

/// Label for an ISO-8601 `created_at` timestamp relative to now.
///
/// Outside the browser there is no clock source wired up, so the raw
/// timestamp is returned.
pub fn format_created_at(created_at: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let then = js_sys::Date::parse(created_at);
        if then.is_nan() {
            return created_at.to_owned();
        }
        label_for_elapsed((js_sys::Date::now() - then) / 1000.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        created_at.to_owned()
    }
}
