// Wire types for the `/flights` collection.
//
// Field names are camelCase on the wire. Gate and status travel as plain
// strings here; the closed sets are enforced by `flightdeck-core` when it
// converts into the domain model.

use serde::{Deserialize, Serialize};

/// `destination` object shared by requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPayload {
    pub city: String,
    pub country: String,
    pub airport_code: String,
}

/// A flight as returned by `GET /flights` and `POST /flights`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
    pub flight_number: String,
    pub original_departure_time: String,
    pub destination: DestinationPayload,
    pub gate: String,
    pub status: String,
}

/// Body of `POST /flights`. Status is assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub original_departure_time: String,
    pub destination: DestinationPayload,
    pub gate: String,
}

/// Optional filters for `GET /flights`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFlightsQuery {
    pub status: Option<String>,
    pub destination_city: Option<String>,
}

impl ListFlightsQuery {
    /// Query parameters to send. Empty values are omitted entirely.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status", status.to_owned()));
        }
        if let Some(city) = self.destination_city.as_deref().filter(|s| !s.is_empty()) {
            params.push(("destinationCity", city.to_owned()));
        }
        params
    }
}
