//! Serde helpers shared by the schema records
//!
//! Model output is loosely typed: numbers and booleans sometimes arrive as
//! strings, and dates sometimes arrive as midnight timestamps. The lenient
//! deserializers here accept those forms and reject anything ambiguous.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Deserialize a value, mapping an explicit JSON `null` to `T::default()`
///
/// Combined with `#[serde(default)]` this makes list fields tolerant of both
/// a missing key and a `null` value, so a collection is never absent.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional number given either as a JSON number or a numeric string
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientF64)
}

/// Optional boolean given as a JSON bool, `0`/`1`, or a word such as `"false"` or `"yes"`
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientBool)
}

/// Optional date given as `YYYY-MM-DD` or as a timestamp whose time is midnight
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientDate)
}

struct LenientF64;

impl<'de> Visitor<'de> for LenientF64 {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

struct LenientBool;

impl<'de> Visitor<'de> for LenientBool {
    type Value = Option<bool>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, 0 or 1, a yes/no word or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(Some(true)),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(Some(false)),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

struct LenientDate;

impl<'de> Visitor<'de> for LenientDate {
    type Value = Option<NaiveDate>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a YYYY-MM-DD date, a midnight timestamp or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_date(v.trim())
            .map(Some)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

/// A timestamp only names a date when its time part is exactly midnight
fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    let timestamp = DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;

    (timestamp.time() == NaiveTime::MIN).then(|| timestamp.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "lenient_date")]
        date: Option<NaiveDate>,
    }

    fn parse(json: &str) -> Result<Loose, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_missing_and_null_are_none() {
        let loose = parse(r#"{"amount": null, "flag": null}"#).unwrap();
        assert!(loose.amount.is_none());
        assert!(loose.flag.is_none());
        assert!(loose.date.is_none());
    }

    #[test]
    fn test_amount_accepts_number_or_numeric_string() {
        assert_eq!(parse(r#"{"amount": 25000}"#).unwrap().amount, Some(25000.0));
        assert_eq!(parse(r#"{"amount": 12.5}"#).unwrap().amount, Some(12.5));
        assert_eq!(parse(r#"{"amount": "25000"}"#).unwrap().amount, Some(25000.0));
        assert_eq!(parse(r#"{"amount": " 99.95 "}"#).unwrap().amount, Some(99.95));
    }

    #[test]
    fn test_amount_rejects_non_numeric_text() {
        assert!(parse(r#"{"amount": "$25,000"}"#).is_err());
        assert!(parse(r#"{"amount": true}"#).is_err());
    }

    #[test]
    fn test_flag_accepts_bool_words_and_digits() {
        assert_eq!(parse(r#"{"flag": false}"#).unwrap().flag, Some(false));
        assert_eq!(parse(r#"{"flag": "false"}"#).unwrap().flag, Some(false));
        assert_eq!(parse(r#"{"flag": "Yes"}"#).unwrap().flag, Some(true));
        assert_eq!(parse(r#"{"flag": 0}"#).unwrap().flag, Some(false));
        assert_eq!(parse(r#"{"flag": 1}"#).unwrap().flag, Some(true));
    }

    #[test]
    fn test_flag_rejects_other_values() {
        assert!(parse(r#"{"flag": "sometimes"}"#).is_err());
        assert!(parse(r#"{"flag": 2}"#).is_err());
    }

    #[test]
    fn test_date_accepts_plain_and_midnight_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 15);
        assert_eq!(parse(r#"{"date": "2024-07-15"}"#).unwrap().date, expected);
        assert_eq!(parse(r#"{"date": "2024-07-15T00:00:00Z"}"#).unwrap().date, expected);
        assert_eq!(parse(r#"{"date": "2024-07-15T00:00:00+05:30"}"#).unwrap().date, expected);
        assert_eq!(parse(r#"{"date": "2024-07-15T00:00:00"}"#).unwrap().date, expected);
    }

    #[test]
    fn test_date_rejects_non_midnight_and_free_text() {
        assert!(parse(r#"{"date": "2024-07-15T09:30:00Z"}"#).is_err());
        assert!(parse(r#"{"date": "July 15th"}"#).is_err());
        assert!(parse(r#"{"date": 20240715}"#).is_err());
    }
}
