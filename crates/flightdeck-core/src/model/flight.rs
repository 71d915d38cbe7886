// ── Flight domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::codes::{FlightStatus, Gate};

/// Where a flight is headed. All fields are non-empty once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub city: String,
    pub country: String,
    pub airport_code: String,
}

impl Destination {
    /// `City (CODE)`, as shown in the flights table.
    pub fn label(&self) -> String {
        format!("{} ({})", self.city, self.airport_code)
    }
}

/// A flight record held by the store.
///
/// `flight_number` is the natural key: lookups and deletes go through it,
/// and the store never holds two records with the same number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_number: String,
    pub original_departure_time: DateTime<Utc>,
    pub destination: Destination,
    pub gate: Gate,
    pub status: FlightStatus,
}

impl Flight {
    /// Departure day as `dd/mm/yyyy`.
    pub fn departure_date_label(&self) -> String {
        self.original_departure_time.format("%d/%m/%Y").to_string()
    }
}

/// Create payload: a flight without a status.
///
/// Only constructed through [`FlightDraft::validate`](super::FlightDraft::validate),
/// so every instance has non-blank fields and a departure that was not in
/// the past at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub flight_number: String,
    pub original_departure_time: DateTime<Utc>,
    pub destination: Destination,
    pub gate: Gate,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn flight() -> Flight {
        Flight {
            flight_number: "AB123".into(),
            original_departure_time: Utc.with_ymd_and_hms(2030, 3, 7, 22, 15, 0).unwrap(),
            destination: Destination {
                city: "Lisbon".into(),
                country: "Portugal".into(),
                airport_code: "LIS".into(),
            },
            gate: Gate::B2,
            status: FlightStatus::Boarding,
        }
    }

    #[test]
    fn destination_label_includes_airport_code() {
        assert_eq!(flight().destination.label(), "Lisbon (LIS)");
    }

    #[test]
    fn departure_date_is_day_first() {
        assert_eq!(flight().departure_date_label(), "07/03/2030");
    }
}
