//! Lenient serde helpers for host documents
//!
//! Host ERP documents are loosely typed: check fields arrive as `0`/`1`,
//! currency fields as numbers or numeric strings, unset links as `""` or
//! `null`. These helpers resolve anything absent or malformed to the
//! "off" value instead of failing the whole document.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Deserialize a check field (`true`, `1`, `"1"`, `"true"`); null, malformed or
/// non-integer strings are false
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .map(|v| v != 0)
                .unwrap_or_else(|_| s.eq_ignore_ascii_case("true"))
        }
        _ => false,
    })
}

/// Deserialize a decimal from a JSON number or numeric string; null or malformed is `None`
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => {
            parse_decimal(&n.to_string()).or_else(|| n.as_f64().and_then(Decimal::from_f64))
        }
        Some(Value::String(s)) => parse_decimal(s.trim()),
        _ => None,
    })
}

/// Deserialize an optional string where `""` means unset
pub fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[derive(Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "flag")]
        on: bool,
        #[serde(default, deserialize_with = "lenient_decimal")]
        rate: Option<Decimal>,
        #[serde(default, deserialize_with = "non_empty_string")]
        link: Option<String>,
    }

    fn parse(json: &str) -> Doc {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_flag_accepts_host_representations() {
        assert!(parse(r#"{"on": true}"#).on);
        assert!(parse(r#"{"on": 1}"#).on);
        assert!(parse(r#"{"on": "1"}"#).on);
        assert!(parse(r#"{"on": "True"}"#).on);
        assert!(!parse(r#"{"on": 0}"#).on);
        assert!(!parse(r#"{"on": "0"}"#).on);
        assert!(!parse(r#"{"on": null}"#).on);
        assert!(!parse(r#"{"on": "maybe"}"#).on);
        assert!(!parse(r#"{"on": [1]}"#).on);
        assert!(!parse("{}").on);
    }

    #[test]
    fn test_flag_string_must_be_integer() {
        assert!(!parse(r#"{"on": "nan"}"#).on);
        assert!(!parse(r#"{"on": "inf"}"#).on);
        assert!(!parse(r#"{"on": "1e9"}"#).on);
        assert!(!parse(r#"{"on": "0.5"}"#).on);
        assert!(parse(r#"{"on": " 1 "}"#).on);
    }

    #[test]
    fn test_decimal_keeps_precision() {
        assert_eq!(parse(r#"{"rate": 29.99}"#).rate, Some(d("29.99")));
        assert_eq!(parse(r#"{"rate": "9.990"}"#).rate, Some(d("9.990")));
        assert_eq!(parse(r#"{"rate": 0}"#).rate, Some(Decimal::ZERO));
        assert_eq!(parse(r#"{"rate": 1e3}"#).rate, Some(d("1000")));
    }

    #[test]
    fn test_malformed_decimal_is_none() {
        assert_eq!(parse(r#"{"rate": "abc"}"#).rate, None);
        assert_eq!(parse(r#"{"rate": null}"#).rate, None);
        assert_eq!(parse(r#"{"rate": true}"#).rate, None);
        assert_eq!(parse("{}").rate, None);
    }

    #[test]
    fn test_empty_link_is_none() {
        assert_eq!(parse(r#"{"link": ""}"#).link, None);
        assert_eq!(parse(r#"{"link": "  "}"#).link, None);
        assert_eq!(parse(r#"{"link": "prod_1"}"#).link.as_deref(), Some("prod_1"));
    }
}
