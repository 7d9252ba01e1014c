use chrono::{DateTime, Local};

pub struct TimeUtils;

impl TimeUtils {
    /// Naive local ISO-8601 with microseconds, e.g. `2024-05-01T09:30:12.045123`
    pub const ALERT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
}

/// Wall-clock timestamp stamped on every alert.
pub fn local_now_iso8601() -> String {
    format_alert_time(&Local::now())
}

pub fn format_alert_time(datetime: &DateTime<Local>) -> String {
    datetime.format(TimeUtils::ALERT_TIME_FORMAT).to_string()
}
