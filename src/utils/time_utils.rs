use chrono::NaiveDate;

/// Monotonic clock that also works on wasm32.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const STANDARD_TIME_FORMAT: &'static str = "%Y-%m-%d";
}

/// Render a calendar day for display. Dates stay as `NaiveDate` inside the engine.
pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn format_duration(ms: i64) -> String {
    if ms < TimeUtils::MS_IN_S {
        return format!("{}ms", ms);
    }
    let secs = ms / TimeUtils::MS_IN_S;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = ms / TimeUtils::MS_IN_MIN;
    if mins < 60 {
        return format!("{}m {}s", mins, secs % 60);
    }
    let hours = ms / TimeUtils::MS_IN_H;
    format!("{}h {}m", hours, mins % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_day() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(d), "2024-03-07");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(250), "250ms");
        assert_eq!(format_duration(4_200), "4s");
        assert_eq!(format_duration(125_000), "2m 5s");
        assert_eq!(format_duration(3_660_000), "1h 1m");
    }
}
