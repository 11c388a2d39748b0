//! Purpose: Checked conversions from a resolved JSON node to typed Rust values.
//! Exports: `FromValue`.
//! Role: Backs the typed getters on `Document`; each getter defaults when this yields `None`.
//! Invariants: Conversions never panic; a representation mismatch is `None`.
//! Invariants: Integers and floats are told apart only here, at retrieval time.

use serde_json::Value;
use std::time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Types a resolved JSON value can be read as.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

/// Integral JSON numbers within `i64`; `2.0` and `1e3` are floats and do not qualify.
impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

/// Any JSON number; integers widen.
impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

/// RFC 3339 timestamp strings, e.g. `2026-02-01T00:00:00Z`.
impl FromValue for OffsetDateTime {
    fn from_value(value: &Value) -> Option<Self> {
        OffsetDateTime::parse(value.as_str()?, &Rfc3339).ok()
    }
}

/// A non-negative number of seconds; fractions are kept down to nanoseconds.
impl FromValue for Duration {
    fn from_value(value: &Value) -> Option<Self> {
        if let Some(secs) = value.as_u64() {
            return Some(Duration::from_secs(secs));
        }
        Duration::try_from_secs_f64(value.as_f64()?).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::FromValue;
    use serde_json::{Value, json};
    use std::time::Duration;
    use time::OffsetDateTime;
    use time::macros::datetime;

    #[test]
    fn strings_only_from_strings() {
        assert_eq!(String::from_value(&json!("hi")), Some("hi".to_string()));
        assert_eq!(String::from_value(&json!(5)), None);
        assert_eq!(String::from_value(&json!(["hi"])), None);
    }

    #[test]
    fn integers_reject_floats_and_overflow() {
        assert_eq!(i64::from_value(&json!(-12)), Some(-12));
        assert_eq!(i64::from_value(&json!(2.0)), None);
        assert_eq!(i64::from_value(&json!(u64::MAX)), None);
        assert_eq!(u64::from_value(&json!(u64::MAX)), Some(u64::MAX));
        assert_eq!(u64::from_value(&json!(-1)), None);
        assert_eq!(i64::from_value(&json!("12")), None);
    }

    #[test]
    fn floats_accept_any_number() {
        assert_eq!(f64::from_value(&json!(1.5)), Some(1.5));
        assert_eq!(f64::from_value(&json!(3)), Some(3.0));
        assert_eq!(f64::from_value(&json!(true)), None);
    }

    #[test]
    fn booleans_are_checked() {
        assert_eq!(bool::from_value(&json!(true)), Some(true));
        assert_eq!(bool::from_value(&json!(false)), Some(false));
        assert_eq!(bool::from_value(&json!(1)), None);
        assert_eq!(bool::from_value(&json!("true")), None);
    }

    #[test]
    fn timestamps_parse_rfc3339() {
        assert_eq!(
            OffsetDateTime::from_value(&json!("2026-02-01T00:00:00Z")),
            Some(datetime!(2026-02-01 0:00 UTC))
        );
        assert_eq!(
            OffsetDateTime::from_value(&json!("2026-02-01T10:30:00.5+02:00")),
            Some(datetime!(2026-02-01 8:30:00.5 UTC))
        );
        assert_eq!(OffsetDateTime::from_value(&json!("2026-02-01")), None);
        assert_eq!(OffsetDateTime::from_value(&json!(1_700_000_000)), None);
    }

    #[test]
    fn durations_are_seconds() {
        assert_eq!(Duration::from_value(&json!(90)), Some(Duration::from_secs(90)));
        assert_eq!(
            Duration::from_value(&json!(1.5)),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(Duration::from_value(&json!(-1)), None);
        assert_eq!(Duration::from_value(&json!("1s")), None);
    }

    #[test]
    fn value_passes_through() {
        let value = json!({"a": [1, 2]});
        assert_eq!(Value::from_value(&value), Some(value.clone()));
    }
}
