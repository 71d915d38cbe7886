// ── Draft validation ──
//
// Turns raw form input into a `NewFlight`. Pure: the caller supplies
// "now", nothing touches the clock or the network.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use strum::Display;
use thiserror::Error;

use super::codes::Gate;
use super::flight::{Destination, NewFlight};

/// Naive formats accepted for the departure time, interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Required text fields of the add-flight form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DraftField {
    #[strum(serialize = "flight number")]
    FlightNumber,
    City,
    Country,
    #[strum(serialize = "airport code")]
    AirportCode,
    #[strum(serialize = "departure time")]
    DepartureTime,
}

/// Client-side validation failure. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField { field: DraftField },

    #[error("Invalid Departure Time. Please use YYYY-MM-DDTHH:MM format.")]
    InvalidDepartureTime { input: String },

    #[error("Departure time cannot be in the past.")]
    DepartureInPast {
        departure: DateTime<Utc>,
        earliest: DateTime<Utc>,
    },
}

/// Raw, unvalidated add-flight form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightDraft {
    pub flight_number: String,
    pub city: String,
    pub country: String,
    pub airport_code: String,
    pub departure_time: String,
    pub gate: Gate,
}

impl FlightDraft {
    /// Validate against `now` and build the create payload.
    ///
    /// Text fields are trimmed. The departure must not be earlier than
    /// `now` truncated to the minute.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<NewFlight, ValidationError> {
        let flight_number = required(&self.flight_number, DraftField::FlightNumber)?;
        let city = required(&self.city, DraftField::City)?;
        let country = required(&self.country, DraftField::Country)?;
        let airport_code = required(&self.airport_code, DraftField::AirportCode)?;
        let departure_raw = required(&self.departure_time, DraftField::DepartureTime)?;

        let departure =
            parse_departure(&departure_raw).ok_or_else(|| ValidationError::InvalidDepartureTime {
                input: departure_raw.clone(),
            })?;

        let earliest = min_departure(now);
        if departure < earliest {
            return Err(ValidationError::DepartureInPast {
                departure,
                earliest,
            });
        }

        Ok(NewFlight {
            flight_number,
            original_departure_time: departure,
            destination: Destination {
                city,
                country,
                airport_code,
            },
            gate: self.gate,
        })
    }
}

fn required(value: &str, field: DraftField) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Parse a departure time.
///
/// Accepts RFC 3339 with an offset, or the form-style
/// `YYYY-MM-DDTHH:MM[:SS]` which is taken as UTC.
pub fn parse_departure(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Earliest accepted departure: `now` with seconds and below zeroed.
pub fn min_departure(now: DateTime<Utc>) -> DateTime<Utc> {
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 1, 10, 30, 45).unwrap()
    }

    fn draft(departure: &str) -> FlightDraft {
        FlightDraft {
            flight_number: "AB123".into(),
            city: "Paris".into(),
            country: "France".into(),
            airport_code: "CDG".into(),
            departure_time: departure.into(),
            gate: Gate::B3,
        }
    }

    #[test]
    fn valid_draft_builds_new_flight() {
        let nf = draft("2030-06-02T09:15").validate(now()).unwrap();
        assert_eq!(nf.flight_number, "AB123");
        assert_eq!(nf.destination.airport_code, "CDG");
        assert_eq!(nf.gate, Gate::B3);
        assert_eq!(
            nf.original_departure_time,
            Utc.with_ymd_and_hms(2030, 6, 2, 9, 15, 0).unwrap()
        );
    }

    #[test]
    fn fields_are_trimmed() {
        let mut d = draft("2030-06-02T09:15");
        d.city = "  Paris ".into();
        let nf = d.validate(now()).unwrap();
        assert_eq!(nf.destination.city, "Paris");
    }

    #[test]
    fn each_blank_field_is_rejected() {
        let cases: [(fn(&mut FlightDraft), DraftField); 5] = [
            (|d| d.flight_number.clear(), DraftField::FlightNumber),
            (|d| d.city = "   ".into(), DraftField::City),
            (|d| d.country.clear(), DraftField::Country),
            (|d| d.airport_code.clear(), DraftField::AirportCode),
            (|d| d.departure_time.clear(), DraftField::DepartureTime),
        ];

        for (blank, expected) in cases {
            let mut d = draft("2030-06-02T09:15");
            blank(&mut d);
            let err = d.validate(now()).unwrap_err();
            assert_eq!(err, ValidationError::MissingField { field: expected });
            assert_eq!(err.to_string(), "All fields are required.");
        }
    }

    #[test]
    fn unparsable_departure_is_rejected() {
        let err = draft("next tuesday").validate(now()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDepartureTime { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid Departure Time. Please use YYYY-MM-DDTHH:MM format."
        );
    }

    #[test]
    fn one_minute_in_the_past_is_rejected() {
        let departure = (now() - Duration::minutes(1)).to_rfc3339();
        let err = draft(&departure).validate(now()).unwrap_err();
        assert!(matches!(err, ValidationError::DepartureInPast { .. }));
        assert_eq!(err.to_string(), "Departure time cannot be in the past.");
    }

    #[test]
    fn current_minute_is_accepted() {
        // now() is 10:30:45; 10:30 truncates to the same minute.
        draft("2030-06-01T10:30").validate(now()).unwrap();
    }

    #[test]
    fn previous_minute_is_rejected() {
        assert!(draft("2030-06-01T10:29").validate(now()).is_err());
    }

    #[test]
    fn rfc3339_offsets_are_honoured() {
        // 12:30+02:00 is 10:30 UTC: same minute as now().
        draft("2030-06-01T12:30:00+02:00").validate(now()).unwrap();
        // 12:29+02:00 is 10:29 UTC.
        assert!(draft("2030-06-01T12:29:00+02:00").validate(now()).is_err());
    }

    #[test]
    fn min_departure_truncates_to_minute() {
        assert_eq!(
            min_departure(now()),
            Utc.with_ymd_and_hms(2030, 6, 1, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_accepts_form_and_rfc3339_inputs() {
        let expected = Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap();
        assert_eq!(parse_departure("2030-01-01T08:00"), Some(expected));
        assert_eq!(parse_departure("2030-01-01T08:00:00"), Some(expected));
        assert_eq!(parse_departure("2030-01-01 08:00"), Some(expected));
        assert_eq!(parse_departure("2030-01-01T08:00:00.000Z"), Some(expected));
        assert_eq!(parse_departure("2030-13-01T08:00"), None);
    }

    #[test]
    fn field_names_are_human_readable() {
        assert_eq!(DraftField::AirportCode.to_string(), "airport code");
        assert_eq!(DraftField::City.to_string(), "city");
    }
}
