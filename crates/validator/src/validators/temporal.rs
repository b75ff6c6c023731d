//! Date validators

use crate::foundation::{ValidationError, Validator, Value, allow, transform, wrap};
use chrono::{DateTime, SecondsFormat, Utc};

/// Converts RFC 3339 strings (`2024-01-15T10:30:00Z`) into dates.
///
/// Dates pass unchanged. Offsets are normalized to UTC.
#[must_use]
pub fn parse_date() -> Validator {
    wrap(
        "parse_date",
        transform(|value: Value| {
            if let Value::Date(_) = value {
                return Ok(value);
            }
            let parsed = match value.as_str() {
                Some(text) => DateTime::parse_from_rfc3339(text.trim()).ok(),
                None => return Err(ValidationError::new("value is not a date", value).into()),
            };
            match parsed {
                Some(date) => Ok(Value::Date(date.with_timezone(&Utc))),
                None => Err(ValidationError::new("value is not an RFC 3339 date", value).into()),
            }
        }),
    )
}

fn format_bound(bound: DateTime<Utc>) -> String {
    bound.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Accepts dates at or after `bound`.
#[must_use]
pub fn not_before(bound: DateTime<Utc>) -> Validator {
    wrap(
        format!("not_before({})", format_bound(bound)),
        allow(
            move |value: &Value| value.as_date().is_some_and(|date| date >= bound),
            format!("value must not be before {}", format_bound(bound)),
        ),
    )
}

/// Accepts dates at or before `bound`.
#[must_use]
pub fn not_after(bound: DateTime<Utc>) -> Validator {
    wrap(
        format!("not_after({})", format_bound(bound)),
        allow(
            move |value: &Value| value.as_date().is_some_and(|date| date <= bound),
            format!("value must not be after {}", format_bound(bound)),
        ),
    )
}
