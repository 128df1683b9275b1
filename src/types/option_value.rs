use crate::types::date_format;
use chrono::{DateTime, FixedOffset};
use serde::de::{self, Visitor};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A scalar that is exactly one of integer, double, date or text.
///
/// JSON numbers decode directly. JSON strings are interpreted by trying each
/// kind in [`OPTION_VALUE_DECODE_PRIORITY`] and keeping the first that parses,
/// so `"42"` decodes as `Integer(42)`, never as `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Integer(i64),
    Double(f64),
    Date(DateTime<FixedOffset>),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValueKind {
    Integer,
    Double,
    Date,
    Text,
}

/// Order in which a JSON string is interpreted. Changing it changes how
/// ambiguous strings such as `"42"` decode.
pub const OPTION_VALUE_DECODE_PRIORITY: [OptionValueKind; 4] = [
    OptionValueKind::Integer,
    OptionValueKind::Double,
    OptionValueKind::Date,
    OptionValueKind::Text,
];

impl OptionValueKind {
    fn try_parse(self, text: &str) -> Option<OptionValue> {
        match self {
            OptionValueKind::Integer => text.parse::<i64>().ok().map(OptionValue::Integer),
            OptionValueKind::Double => text
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(OptionValue::Double),
            OptionValueKind::Date => date_format::parse(text).map(OptionValue::Date),
            OptionValueKind::Text => Some(OptionValue::Text(text.to_string())),
        }
    }
}

impl OptionValue {
    /// Interprets a string using the decode priority.
    pub fn parse(text: &str) -> Self {
        OPTION_VALUE_DECODE_PRIORITY
            .iter()
            .find_map(|kind| kind.try_parse(text))
            .unwrap_or_else(|| OptionValue::Text(text.to_string()))
    }

    pub fn kind(&self) -> OptionValueKind {
        match self {
            OptionValue::Integer(_) => OptionValueKind::Integer,
            OptionValue::Double(_) => OptionValueKind::Double,
            OptionValue::Date(_) => OptionValueKind::Date,
            OptionValue::Text(_) => OptionValueKind::Text,
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

/// Doubles must be finite; `NaN` and the infinities have no JSON form and
/// fail to encode.
impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Double(value)
    }
}

/// Fractional seconds are dropped; dates are exchanged at whole-second precision.
impl From<DateTime<FixedOffset>> for OptionValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        OptionValue::Date(date_format::truncate(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Integer(v) => serializer.serialize_i64(*v),
            OptionValue::Double(v) if v.is_finite() => serializer.serialize_f64(*v),
            OptionValue::Double(v) => Err(ser::Error::custom(format!(
                "option value {v} is not a finite number"
            ))),
            OptionValue::Date(v) => {
                let text = date_format::encode(v).map_err(ser::Error::custom)?;
                serializer.serialize_str(&text)
            }
            OptionValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

struct OptionValueVisitor;

impl<'de> Visitor<'de> for OptionValueVisitor {
    type Value = OptionValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer, double, date string or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<OptionValue, E> {
        Ok(OptionValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<OptionValue, E> {
        Ok(match i64::try_from(v) {
            Ok(v) => OptionValue::Integer(v),
            Err(_) => OptionValue::Double(v as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<OptionValue, E> {
        Ok(OptionValue::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<OptionValue, E> {
        Ok(OptionValue::parse(v))
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OptionValueVisitor)
    }
}
