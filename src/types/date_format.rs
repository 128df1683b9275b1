//! The fixed `yyyy-MM-dd'T'HH:mm:ssZZZZZ` timestamp format.
//!
//! UTC renders as a trailing `Z`; other offsets render as `+hh:mm`. The
//! format has whole-second precision, so encoding a date that carries
//! fractional seconds is an error rather than a silent truncation.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse(text: &str) -> Option<DateTime<FixedOffset>> {
    match text.strip_suffix('Z') {
        Some(local) => {
            let naive = NaiveDateTime::parse_from_str(local, LOCAL_FORMAT).ok()?;
            Some(FixedOffset::east_opt(0)?.from_utc_datetime(&naive))
        }
        None => DateTime::parse_from_str(text, OFFSET_FORMAT).ok(),
    }
}

pub fn format(date: &DateTime<FixedOffset>) -> String {
    if date.offset().local_minus_utc() == 0 {
        format!("{}Z", date.format(LOCAL_FORMAT))
    } else {
        date.format(OFFSET_FORMAT).to_string()
    }
}

/// Formats `date`, failing when it cannot be written without losing precision.
pub fn encode(date: &DateTime<FixedOffset>) -> Result<String, String> {
    if date.nanosecond() != 0 {
        return Err(format!(
            "`{}` has sub-second precision, which yyyy-MM-ddTHH:mm:ssZZZZZ cannot carry",
            date.to_rfc3339()
        ));
    }
    Ok(format(date))
}

/// Drops fractional seconds so the date survives an encode/decode round trip.
pub fn truncate(date: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    date.with_nanosecond(0).unwrap_or(date)
}

/// `#[serde(with = "date_format")]` support.
pub fn serialize<S: Serializer>(date: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error> {
    let text = encode(date).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&text)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse(&text).ok_or_else(|| {
        serde::de::Error::custom(format!("`{text}` is not a yyyy-MM-ddTHH:mm:ssZZZZZ timestamp"))
    })
}
