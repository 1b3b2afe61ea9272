//! Field validation for task forms.
//!
//! Every create and update funnels its title/date/time through
//! [`validate_fields`], so the rules and their order live in one place:
//!
//! 1. supplied fields must be non-empty after trimming (`missing_fields`)
//! 2. the date must look like `YYYY-MM-DD` (`bad_date_format`)
//! 3. the time must look like `HH:MM` (`bad_time_format`)
//! 4. hour and minute must be in range (`bad_time_value`)
//!
//! Only the shape of the date is checked; `2025-13-40` passes.

use std::sync::LazyLock;

use regex::Regex;

use crate::enums::ValidationReason;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").unwrap());

/// Raw, untrimmed field values. `None` means "not supplied".
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldInput<'a> {
    pub title: Option<&'a str>,
    pub date: Option<&'a str>,
    pub time: Option<&'a str>,
}

/// Trimmed field values that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedFields {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Validate a (possibly partial) set of task fields.
///
/// # Errors
///
/// Returns the first [`ValidationReason`] that applies, in the order listed
/// in the module docs.
pub fn validate_fields(input: FieldInput<'_>) -> Result<CheckedFields, ValidationReason> {
    let title = input.title.map(str::trim);
    let date = input.date.map(str::trim);
    let time = input.time.map(str::trim);

    if [title, date, time]
        .into_iter()
        .flatten()
        .any(str::is_empty)
    {
        return Err(ValidationReason::MissingFields);
    }

    if let Some(date) = date {
        check_date(date)?;
    }
    if let Some(time) = time {
        check_time(time)?;
    }

    Ok(CheckedFields {
        title: title.map(String::from),
        date: date.map(String::from),
        time: time.map(String::from),
    })
}

fn check_date(date: &str) -> Result<(), ValidationReason> {
    if DATE_PATTERN.is_match(date) {
        Ok(())
    } else {
        Err(ValidationReason::BadDateFormat)
    }
}

fn check_time(time: &str) -> Result<(), ValidationReason> {
    let caps = TIME_PATTERN
        .captures(time)
        .ok_or(ValidationReason::BadTimeFormat)?;

    // Two ASCII digits each, so these parses cannot overflow.
    let hour: u8 = caps[1]
        .parse()
        .map_err(|_| ValidationReason::BadTimeFormat)?;
    let minute: u8 = caps[2]
        .parse()
        .map_err(|_| ValidationReason::BadTimeFormat)?;

    if hour > 23 || minute > 59 {
        return Err(ValidationReason::BadTimeValue);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn full<'a>(title: &'a str, date: &'a str, time: &'a str) -> FieldInput<'a> {
        FieldInput {
            title: Some(title),
            date: Some(date),
            time: Some(time),
        }
    }

    #[test]
    fn accepts_and_trims_valid_fields() {
        let checked = validate_fields(full("  Gym  ", " 2025-11-18", "17:00 ")).unwrap();
        assert_eq!(
            checked,
            CheckedFields {
                title: Some("Gym".into()),
                date: Some("2025-11-18".into()),
                time: Some("17:00".into()),
            }
        );
    }

    #[rstest]
    #[case::empty_title("", "2025-01-01", "10:00", ValidationReason::MissingFields)]
    #[case::blank_date("X", "   ", "10:00", ValidationReason::MissingFields)]
    #[case::empty_time("X", "2025-01-01", "", ValidationReason::MissingFields)]
    #[case::single_digit_month("X", "2025-1-1", "10:00", ValidationReason::BadDateFormat)]
    #[case::slashes("X", "2025/01/01", "10:00", ValidationReason::BadDateFormat)]
    #[case::trailing_text("X", "2025-01-01x", "10:00", ValidationReason::BadDateFormat)]
    #[case::non_ascii_digits("X", "２０２５-01-01", "10:00", ValidationReason::BadDateFormat)]
    #[case::single_digit_hour("X", "2025-01-01", "9:00", ValidationReason::BadTimeFormat)]
    #[case::seconds("X", "2025-01-01", "10:00:00", ValidationReason::BadTimeFormat)]
    #[case::hour_25("X", "2025-01-01", "25:00", ValidationReason::BadTimeValue)]
    #[case::minute_60("X", "2025-01-01", "10:60", ValidationReason::BadTimeValue)]
    fn rejects_with_reason(
        #[case] title: &str,
        #[case] date: &str,
        #[case] time: &str,
        #[case] expected: ValidationReason,
    ) {
        assert_eq!(validate_fields(full(title, date, time)), Err(expected));
    }

    #[rstest]
    #[case("00:00")]
    #[case("23:59")]
    #[case("12:30")]
    fn accepts_boundary_times(#[case] time: &str) {
        assert!(validate_fields(full("X", "2025-01-01", time)).is_ok());
    }

    #[test]
    fn date_shape_only_no_calendar_check() {
        assert!(validate_fields(full("X", "2025-13-40", "10:00")).is_ok());
    }

    #[test]
    fn missing_fields_wins_over_format_errors() {
        assert_eq!(
            validate_fields(full("", "bad", "99:99")),
            Err(ValidationReason::MissingFields)
        );
    }

    #[test]
    fn date_format_checked_before_time() {
        assert_eq!(
            validate_fields(full("X", "bad", "bad")),
            Err(ValidationReason::BadDateFormat)
        );
    }

    #[test]
    fn partial_input_checks_only_supplied_fields() {
        let checked = validate_fields(FieldInput {
            time: Some("08:15"),
            ..FieldInput::default()
        })
        .unwrap();
        assert_eq!(checked.time.as_deref(), Some("08:15"));
        assert!(checked.title.is_none());
        assert!(checked.date.is_none());

        assert_eq!(
            validate_fields(FieldInput {
                title: Some("  "),
                ..FieldInput::default()
            }),
            Err(ValidationReason::MissingFields)
        );
    }

    #[test]
    fn empty_input_is_valid() {
        assert_eq!(
            validate_fields(FieldInput::default()),
            Ok(CheckedFields::default())
        );
    }
}
