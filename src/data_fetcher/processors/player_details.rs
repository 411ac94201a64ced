//! Derivation of display fields from raw directory entries.
//!
//! Everything here is best effort per field: a malformed birth date yields no
//! age for that player and nothing else.

use chrono::{DateTime, Datelike, NaiveDate};
use serde_json::Value;
use tracing::debug;

use crate::data_fetcher::models::{RawPlayer, ResolvedPlayer};

/// Joins first and last name with a single space and trims the result.
/// Missing parts count as empty strings.
///
/// # Example
/// ```
/// use dynasty_analyzer::data_fetcher::processors::format_player_name;
///
/// assert_eq!(format_player_name(Some("Justin"), Some("Jefferson")), "Justin Jefferson");
/// assert_eq!(format_player_name(None, Some("Jefferson")), "Jefferson");
/// assert_eq!(format_player_name(None, None), "");
/// ```
pub fn format_player_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    format!(
        "{} {}",
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default()
    )
    .trim()
    .to_string()
}

/// Coerces an upstream birth date to epoch milliseconds.
///
/// Accepts a JSON number (integer or float) or a string holding one. Anything
/// else, including non-finite floats, returns `None`.
pub fn coerce_epoch_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(float_to_millis)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(float_to_millis))
        }
        _ => None,
    }
}

fn float_to_millis(value: f64) -> Option<i64> {
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

/// Whole years between `birth_date` and `today`.
///
/// One year is subtracted when today's month/day falls before the birthday.
///
/// A birth date after `today` deliberately yields `None` rather than the
/// negative number the plain year arithmetic would give: such a value is bad
/// upstream data, and clients render a missing age as unknown.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> Option<i32> {
    if birth_date > today {
        return None;
    }

    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    Some(age)
}

/// Age derived from a raw `birth_date` value, evaluated on `today` (UTC).
pub fn calculate_age(birth_date: &Value, today: NaiveDate) -> Option<i32> {
    let Some(millis) = coerce_epoch_millis(birth_date) else {
        debug!("Unparseable birth_date value: {birth_date}");
        return None;
    };

    let Some(born) = DateTime::from_timestamp_millis(millis) else {
        debug!("birth_date out of range: {millis}");
        return None;
    };

    age_on(born.date_naive(), today)
}

/// Builds the client-facing record for one directory entry.
pub fn resolve_player(raw: &RawPlayer, today: NaiveDate) -> ResolvedPlayer {
    ResolvedPlayer {
        name: format_player_name(raw.first_name.as_deref(), raw.last_name.as_deref()),
        position: raw.position.clone(),
        age: raw
            .birth_date
            .as_ref()
            .and_then(|birth_date| calculate_age(birth_date, today)),
        team: raw.team.clone(),
        number: raw.number.clone(),
        status: raw.status.clone(),
        experience: raw.years_exp.clone(),
    }
}
