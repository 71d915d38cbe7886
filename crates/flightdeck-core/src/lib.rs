//! Client core for the flightdeck dashboard.
//!
//! Keeps a local projection of a remote flight collection in sync through
//! [`FlightStore`], and drives the add-flight form through
//! [`AddFlightForm`]. Nothing here renders; front ends observe
//! [`StoreState`] via [`FlightStore::subscribe`] and draw
//! [`Presentation`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), flightdeck_core::CoreError> {
//! use flightdeck_core::{ClientConfig, FlightFilter, FlightStatus, FlightStore};
//!
//! let store = FlightStore::new(&ClientConfig::default())?;
//! store
//!     .refresh(Some(FlightFilter::by_status(FlightStatus::Delayed)))
//!     .await?;
//! for flight in store.snapshot().flights.iter() {
//!     println!("{} {}", flight.flight_number, flight.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod stream;
pub mod workflow;

pub use config::{ClientConfig, DEFAULT_API_URL, TlsVerification};
pub use error::CoreError;
pub use model::{
    Destination, DraftField, Flight, FlightDraft, FlightFilter, FlightStatus, Gate, NewFlight,
    ValidationError,
};
pub use store::{FlightStore, LoadState, Presentation, RefreshOutcome, StoreState};
pub use stream::StateStream;
pub use workflow::{AddFlightForm, FieldEdit, FormState, apply_field_edit};
