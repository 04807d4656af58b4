//! Wall-clock times travel as `"HH:MM"` strings; seconds are accepted on input and dropped on
//! output.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%H:%M";

pub fn parse(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value.trim(), FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value.trim(), "%H:%M:%S"))
}

pub fn format(value: &NaiveTime) -> String {
    value.format(FORMAT).to_string()
}

pub fn serialize<S>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
