use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ConfigError;

pub const ISO_DATE: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded fields and signed years, so the parsed date is
/// formatted back and compared with the input to reject those forms.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(input, ISO_DATE)
        .ok()
        .filter(|date| date.format(ISO_DATE).to_string() == input)
        .ok_or_else(|| ConfigError::InvalidDate {
            input: input.to_string(),
        })
}

pub trait DayBoundaries {
    fn start_of_day(&self) -> NaiveDateTime;
}

impl DayBoundaries for NaiveDate {
    fn start_of_day(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

/// Wall clock time in the local timezone, without the offset.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Seconds from `start` to `end` with millisecond resolution, negative when
/// `end` is before `start`.
pub fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / 1000.0
}
