// ── Domain model ──
//
// Canonical flight types shared by the store, the add-flight workflow,
// and the CLI. Wire shapes live in `flightdeck_api::types`.

mod codes;
mod filter;
mod flight;
mod validation;

pub use codes::{FlightStatus, Gate};
pub use filter::FlightFilter;
pub use flight::{Destination, Flight, NewFlight};
pub use validation::{DraftField, FlightDraft, ValidationError, min_departure, parse_departure};
