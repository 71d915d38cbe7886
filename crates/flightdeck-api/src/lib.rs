//! Async client for the flight board REST API.
//!
//! Three operations against the `/flights` collection: list (with optional
//! filters), create, and delete by flight number. Every call is a single
//! round trip with no retries and no caching. Wire types live in
//! [`types`]; `flightdeck-core` converts them into the domain model.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::FlightsClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{CreateFlightRequest, DestinationPayload, FlightResponse, ListFlightsQuery};
