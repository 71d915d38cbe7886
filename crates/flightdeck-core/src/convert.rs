// ── API-to-domain type conversions ──
//
// Bridges raw `flightdeck_api` wire types into canonical domain types.
// Inbound conversion is fallible: gates and statuses must belong to their
// closed sets, and the departure time must parse.

use std::str::FromStr;

use chrono::SecondsFormat;

use flightdeck_api::{CreateFlightRequest, DestinationPayload, FlightResponse, ListFlightsQuery};

use crate::error::CoreError;
use crate::model::{
    Destination, Flight, FlightFilter, FlightStatus, Gate, NewFlight, parse_departure,
};

// ── Inbound ──────────────────────────────────────────────────────────

impl From<DestinationPayload> for Destination {
    fn from(d: DestinationPayload) -> Self {
        Self {
            city: d.city,
            country: d.country,
            airport_code: d.airport_code,
        }
    }
}

impl TryFrom<FlightResponse> for Flight {
    type Error = CoreError;

    fn try_from(f: FlightResponse) -> Result<Self, Self::Error> {
        let gate = Gate::from_str(&f.gate).map_err(|_| CoreError::Decode {
            message: format!("flight {}: unknown gate '{}'", f.flight_number, f.gate),
        })?;
        let status = FlightStatus::from_str(&f.status).map_err(|_| CoreError::Decode {
            message: format!("flight {}: unknown status '{}'", f.flight_number, f.status),
        })?;
        let original_departure_time =
            parse_departure(&f.original_departure_time).ok_or_else(|| CoreError::Decode {
                message: format!(
                    "flight {}: invalid departure time '{}'",
                    f.flight_number, f.original_departure_time
                ),
            })?;

        Ok(Self {
            flight_number: f.flight_number,
            original_departure_time,
            destination: f.destination.into(),
            gate,
            status,
        })
    }
}

// ── Outbound ─────────────────────────────────────────────────────────

impl From<&Destination> for DestinationPayload {
    fn from(d: &Destination) -> Self {
        Self {
            city: d.city.clone(),
            country: d.country.clone(),
            airport_code: d.airport_code.clone(),
        }
    }
}

impl From<&NewFlight> for CreateFlightRequest {
    fn from(f: &NewFlight) -> Self {
        Self {
            flight_number: f.flight_number.clone(),
            original_departure_time: f
                .original_departure_time
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            destination: (&f.destination).into(),
            gate: f.gate.to_string(),
        }
    }
}

impl From<&FlightFilter> for ListFlightsQuery {
    fn from(f: &FlightFilter) -> Self {
        Self {
            status: f.status.map(|s| s.to_string()),
            destination_city: f.destination_city.clone(),
        }
    }
}
