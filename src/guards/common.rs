//! Common Guards
//!
//! Generic predicates over untrusted JSON values. Every guard is total: it
//! never panics and answers `false` for any shape it does not recognize.

use std::any::Any;
use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::Value;

/// Check if value is defined (not null)
pub fn is_defined(value: &Value) -> bool {
    !value.is_null()
}

/// Check if value is null
pub fn is_nullish(value: &Value) -> bool {
    value.is_null()
}

/// Check if value is a string
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Check if value is a string with non-whitespace content
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// Check if value is a number.
///
/// JSON cannot carry NaN, so every JSON number passes.
pub fn is_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| !n.is_nan())
}

/// Check if value is a number greater than zero
pub fn is_positive_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n > 0.0)
}

/// Check if value is a whole number
pub fn is_integer(value: &Value) -> bool {
    if value.is_i64() || value.is_u64() {
        return true;
    }
    value.as_f64().is_some_and(|n| n.is_finite() && n.fract() == 0.0)
}

/// Check if value is a boolean
pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// Check if value is an array
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Check if value is an array with at least one item
pub fn is_non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// Check if value is an object (excluding null and arrays)
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Check if value is a plain object.
///
/// JSON objects carry no prototype, so this matches [`is_object`].
pub fn is_plain_object(value: &Value) -> bool {
    is_object(value)
}

/// Check if a runtime value is a chrono date or datetime
pub fn is_date(value: &dyn Any) -> bool {
    value.is::<DateTime<Utc>>()
        || value.is::<DateTime<Local>>()
        || value.is::<DateTime<FixedOffset>>()
        || value.is::<NaiveDateTime>()
        || value.is::<NaiveDate>()
}

/// Check if value is a string that parses as a date
pub fn is_date_string(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    let s = s.trim();
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NaiveDate::parse_from_str(s, "%m/%d/%Y").is_ok()
}

/// Check if object has a specific property
pub fn has_property(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

/// Check if object has all specified properties
pub fn has_properties(value: &Value, keys: &[&str]) -> bool {
    value
        .as_object()
        .is_some_and(|map| keys.iter().all(|key| map.contains_key(*key)))
}

/// Check if value is one of the given string variants
pub fn is_enum_value(value: &Value, variants: &[&str]) -> bool {
    value.as_str().is_some_and(|s| variants.contains(&s))
}

fn cached(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

fn matches(cell: &'static OnceLock<Option<Regex>>, pattern: &str, value: &Value) -> bool {
    match (value.as_str(), cached(cell, pattern)) {
        (Some(s), Some(re)) => re.is_match(s),
        _ => false,
    }
}

static UUID_RE: OnceLock<Option<Regex>> = OnceLock::new();
static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
static PHONE_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Check if value is a hyphenated UUID (case-insensitive)
pub fn is_uuid(value: &Value) -> bool {
    matches(
        &UUID_RE,
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
        value,
    )
}

/// Check if value looks like an email address
pub fn is_email(value: &Value) -> bool {
    matches(&EMAIL_RE, r"^[^\s@]+@[^\s@]+\.[^\s@]+$", value)
}

/// Check if value parses as an absolute URL
pub fn is_url(value: &Value) -> bool {
    value.as_str().is_some_and(|s| url::Url::parse(s).is_ok())
}

/// Check if value looks like a phone number (basic check)
pub fn is_phone_number(value: &Value) -> bool {
    matches(
        &PHONE_RE,
        r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$",
        value,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defined_and_nullish() {
        assert!(is_defined(&json!(0)));
        assert!(is_defined(&json!(false)));
        assert!(!is_defined(&Value::Null));
        assert!(is_nullish(&Value::Null));
        assert!(!is_nullish(&json!("")));
    }

    #[test]
    fn test_non_empty_array() {
        assert!(is_non_empty_array(&json!([0])));
        assert!(!is_non_empty_array(&json!([])));
        assert!(!is_non_empty_array(&json!({"0": 1})));
    }

    #[test]
    fn test_non_empty_string_trims() {
        assert!(is_non_empty_string(&json!("deal")));
        assert!(!is_non_empty_string(&json!("   ")));
        assert!(!is_non_empty_string(&json!(3)));
    }

    #[test]
    fn test_numbers() {
        assert!(is_number(&json!(0)));
        assert!(is_number(&json!(-2.5)));
        assert!(!is_number(&json!("2")));
        assert!(is_integer(&json!(4)));
        assert!(is_integer(&json!(4.0)));
        assert!(!is_integer(&json!(4.2)));
        assert!(is_positive_number(&json!(0.1)));
        assert!(!is_positive_number(&json!(0)));
    }

    #[test]
    fn test_object_excludes_null_and_arrays() {
        assert!(is_object(&json!({})));
        assert!(is_plain_object(&json!({"a": 1})));
        assert!(!is_object(&json!(null)));
        assert!(!is_object(&json!([])));
    }

    #[test]
    fn test_has_property() {
        let value = json!({"data": null, "success": true});
        assert!(has_property(&value, "data"));
        assert!(!has_property(&value, "error"));
        assert!(!has_property(&json!(["data"]), "data"));
        assert!(has_properties(&value, &["data", "success"]));
        assert!(!has_properties(&value, &["data", "error"]));
    }

    #[test]
    fn test_uuid_and_email_reject_non_strings() {
        for value in [json!(""), json!(null), json!(42), json!({})] {
            assert!(!is_uuid(&value));
            assert!(!is_email(&value));
        }
        assert!(is_uuid(&json!("123E4567-e89b-12d3-a456-426614174000")));
        assert!(!is_uuid(&json!("123e4567e89b12d3a456426614174000")));
        assert!(is_email(&json!("agent@example.com")));
        assert!(!is_email(&json!("agent@example")));
        assert!(!is_email(&json!("two words@example.com")));
    }

    #[test]
    fn test_url_never_fails() {
        assert!(is_url(&json!("https://example.com/listing?id=4")));
        assert!(!is_url(&json!("example.com")));
        assert!(!is_url(&json!("http://[::1")));
        assert!(!is_url(&json!(7)));
    }

    #[test]
    fn test_phone_number() {
        assert!(is_phone_number(&json!("(555) 123-4567")));
        assert!(is_phone_number(&json!("+15551234567")));
        assert!(is_phone_number(&json!("555.123.4567")));
        assert!(!is_phone_number(&json!("call me")));
        assert!(!is_phone_number(&json!("")));
    }

    #[test]
    fn test_dates() {
        assert!(is_date(&Utc::now()));
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
        assert!(is_date(&leap_day));
        assert!(!is_date(&Some(leap_day)));
        assert!(!is_date(&"2024-02-29"));
        assert!(is_date_string(&json!("2024-02-29")));
        assert!(is_date_string(&json!("2024-03-01T10:00:00Z")));
        assert!(is_date_string(&json!("03/15/2024")));
        assert!(!is_date_string(&json!("2023-02-29")));
        assert!(!is_date_string(&json!("soon")));
    }

    #[test]
    fn test_enum_value() {
        let statuses = ["Pre-contract", "Under Contract", "Closed"];
        assert!(is_enum_value(&json!("Closed"), &statuses));
        assert!(!is_enum_value(&json!("closed"), &statuses));
        assert!(!is_enum_value(&json!(1), &statuses));
    }
}
