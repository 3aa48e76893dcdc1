use chrono::{DateTime, NaiveDate, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Sentinel meaning "never calculated". Any real trading date compares greater.
    pub const NEVER: NaiveDate = NaiveDate::MIN;
}

/// Truncate an instant to its UTC calendar date.
pub fn utc_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

pub fn today_utc() -> NaiveDate {
    utc_date(Utc::now())
}

pub fn format_date(date: NaiveDate) -> String {
    // Used for display purposes
    if date == TimeUtils::NEVER {
        return "never".to_string();
    }
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}
