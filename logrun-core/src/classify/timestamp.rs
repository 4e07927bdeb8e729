use crate::record::MalformedTimestamp;
use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// `08/Apr/2018 07:54:55`, read as UTC.
pub const DATE_TIME_LAYOUT: &str = "%d/%b/%Y %H:%M:%S";

/// `08/Apr/2018 07:54:55 +0200`
pub const DATE_TIME_OFFSET_LAYOUT: &str = "%d/%b/%Y %H:%M:%S %z";

/// Join the captured date and time with a single space and parse the result.
///
/// When the extended grammar captured a UTC offset it is appended and honoured,
/// otherwise the wall-clock time is taken to be UTC.
pub fn derive_timestamp(
    date: &str,
    time: &str,
    utc_offset: Option<&str>,
) -> Result<DateTime<FixedOffset>, MalformedTimestamp> {
    match utc_offset {
        Some(offset) => {
            let raw = format!("{date} {time} {offset}");
            DateTime::parse_from_str(&raw, DATE_TIME_OFFSET_LAYOUT)
                .map_err(|source| MalformedTimestamp { raw, source })
        }
        None => {
            let raw = format!("{date} {time}");
            NaiveDateTime::parse_from_str(&raw, DATE_TIME_LAYOUT)
                .map(|naive| naive.and_utc().fixed_offset())
                .map_err(|source| MalformedTimestamp { raw, source })
        }
    }
}
