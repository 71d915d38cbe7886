// ── Flight collection store ──
//
// Authoritative local copy of the flight list plus its fetch status and
// filter criteria. Mutations are broadcast to subscribers via `watch`.

mod flight_store;
mod state;

pub use flight_store::{FlightStore, RefreshOutcome};
pub use state::{LoadState, Presentation, StoreState};
