use jiff::civil::Date;
use jiff::{ToSpan, Zoned};
use serde_json::json;

use crate::FieldViolation;

/// Request types that can be checked field-by-field before a handler runs.
///
/// Returns one violation per invalid field, in declaration order. An
/// empty vector means the input is valid. Implementations must be pure:
/// no state is retained between invocations.
pub trait Validate {
    fn validate(&self) -> Vec<FieldViolation>;
}

/// Violation message attached to an out-of-window event date
pub const EVENT_DATE_MESSAGE: &str = "event date must be within 10 years from today";

/// Check an optional event date against the allowed window.
///
/// Absent dates pass — required-ness is a separate concern. Present dates
/// must fall within `today..=today + 10 years`, both bounds inclusive,
/// evaluated against the wall-clock date at validation time.
pub fn validate_event_date(field: &str, value: Option<Date>) -> Option<FieldViolation> {
    let date = value?;
    if within_window(date, Zoned::now().date()) {
        None
    } else {
        Some(FieldViolation::new(field, json!(date.to_string()), EVENT_DATE_MESSAGE))
    }
}

fn within_window(value: Date, today: Date) -> bool {
    value >= today && value <= today.saturating_add(10.years())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn today_is_valid() {
        let today = date(2026, 1, 15);
        assert!(within_window(today, today));
    }

    #[test]
    fn yesterday_is_invalid() {
        let today = date(2026, 1, 15);
        assert!(!within_window(date(2026, 1, 14), today));
    }

    #[test]
    fn ten_years_out_is_valid() {
        let today = date(2026, 1, 15);
        assert!(within_window(date(2036, 1, 15), today));
    }

    #[test]
    fn one_day_past_the_window_is_invalid() {
        let today = date(2026, 1, 15);
        assert!(!within_window(date(2036, 1, 16), today));
    }

    #[test]
    fn absent_date_is_valid() {
        assert!(validate_event_date("eventDate", None).is_none());
    }

    #[test]
    fn current_date_passes_against_the_wall_clock() {
        let today = Zoned::now().date();
        assert!(validate_event_date("eventDate", Some(today)).is_none());
    }

    #[test]
    fn past_date_is_reported_with_field_and_message() {
        let yesterday = Zoned::now().date().yesterday().unwrap();
        let violation = validate_event_date("eventDate", Some(yesterday)).unwrap();
        assert_eq!(violation.field, "eventDate");
        assert_eq!(violation.message, EVENT_DATE_MESSAGE);
        assert_eq!(violation.rejected_value, json!(yesterday.to_string()));
    }
}
