use crate::types::date_format;
use chrono::{DateTime, FixedOffset};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The admissible values of a column: a category list, or low/high bounds
/// that are either both numbers or both dates.
#[derive(Debug, Clone, PartialEq)]
pub enum Range {
    Categorical(Vec<String>),
    Value {
        low: f64,
        high: f64,
    },
    Date {
        low: DateTime<FixedOffset>,
        high: DateTime<FixedOffset>,
    },
}

impl Range {
    /// Date bounds at whole-second precision.
    pub fn dates(low: DateTime<FixedOffset>, high: DateTime<FixedOffset>) -> Self {
        Range::Date {
            low: date_format::truncate(low),
            high: date_format::truncate(high),
        }
    }
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Range::Categorical(keys) => keys.serialize(serializer),
            Range::Value { low, high } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(ser::Error::custom(format!(
                        "range bounds {low}..{high} are not finite numbers"
                    )));
                }
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("low", low)?;
                map.serialize_entry("high", high)?;
                map.end()
            }
            Range::Date { low, high } => {
                let low = date_format::encode(low).map_err(ser::Error::custom)?;
                let high = date_format::encode(high).map_err(ser::Error::custom)?;
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("low", &low)?;
                map.serialize_entry("high", &high)?;
                map.end()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Bound {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Categorical(Vec<String>),
    Bounds { low: Bound, high: Bound },
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RangeRepr::deserialize(deserializer)? {
            RangeRepr::Categorical(keys) => Ok(Range::Categorical(keys)),
            RangeRepr::Bounds {
                low: Bound::Number(low),
                high: Bound::Number(high),
            } => Ok(Range::Value { low, high }),
            RangeRepr::Bounds {
                low: Bound::Text(low),
                high: Bound::Text(high),
            } => match (date_format::parse(&low), date_format::parse(&high)) {
                (Some(low), Some(high)) => Ok(Range::Date { low, high }),
                _ => Err(serde::de::Error::custom(
                    "range bounds must be yyyy-MM-ddTHH:mm:ssZZZZZ dates",
                )),
            },
            RangeRepr::Bounds { .. } => Err(serde::de::Error::custom(
                "range bounds must both be numbers or both be dates",
            )),
        }
    }
}
