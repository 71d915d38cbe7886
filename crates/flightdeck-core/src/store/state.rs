// ── Store state snapshot ──
//
// Everything a view needs to render the flights table. Published as a
// whole through a `watch` channel so readers always see a consistent
// combination of load state, records, and error message.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::model::{Flight, FlightFilter};

/// Fetch lifecycle of the held collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Point-in-time view of the store.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub load: LoadState,
    /// Held records, in server order. Retained across failed refreshes.
    pub flights: Arc<Vec<Flight>>,
    /// Message from the most recent failure, cleared by the next success.
    pub error: Option<String>,
    /// Criteria the next refresh will use.
    pub filter: FlightFilter,
    pub last_refreshed: Option<DateTime<Utc>>,
}

/// How the flights table should be drawn for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// First load in progress, nothing to show yet.
    Loading,
    /// Failure with no held records: the error replaces the table.
    Failed { message: String },
    /// Draw the table. `banner` carries an error shown alongside stale
    /// rows; `updating` means a refresh is in flight over existing rows;
    /// `empty` means a successful fetch returned nothing.
    Table {
        flights: Arc<Vec<Flight>>,
        banner: Option<String>,
        updating: bool,
        empty: bool,
    },
}

impl StoreState {
    pub fn find(&self, flight_number: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.flight_number == flight_number)
    }

    /// Stale-while-revalidate projection of the state.
    pub fn presentation(&self) -> Presentation {
        let held = !self.flights.is_empty();
        match (self.load, held) {
            (LoadState::Loading, false) => Presentation::Loading,
            (LoadState::Error, false) => Presentation::Failed {
                message: self.error.clone().unwrap_or_default(),
            },
            _ => Presentation::Table {
                flights: Arc::clone(&self.flights),
                banner: self.error.clone(),
                updating: self.load == LoadState::Loading,
                empty: self.load == LoadState::Success && !held,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::{Destination, FlightStatus, Gate};

    fn flight(n: &str) -> Flight {
        Flight {
            flight_number: n.into(),
            original_departure_time: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            destination: Destination {
                city: "Oslo".into(),
                country: "Norway".into(),
                airport_code: "OSL".into(),
            },
            gate: Gate::A1,
            status: FlightStatus::Scheduled,
        }
    }

    #[test]
    fn idle_table_is_not_reported_empty() {
        let p = StoreState::default().presentation();
        assert!(matches!(p, Presentation::Table { empty: false, updating: false, .. }));
    }

    #[test]
    fn successful_fetch_of_nothing_is_empty() {
        let state = StoreState {
            load: LoadState::Success,
            ..StoreState::default()
        };
        assert!(matches!(state.presentation(), Presentation::Table { empty: true, .. }));
    }

    #[test]
    fn first_load_shows_loading() {
        let state = StoreState {
            load: LoadState::Loading,
            ..StoreState::default()
        };
        assert_eq!(state.presentation(), Presentation::Loading);
    }

    #[test]
    fn reload_keeps_rows_visible() {
        let state = StoreState {
            load: LoadState::Loading,
            flights: Arc::new(vec![flight("AB123")]),
            ..StoreState::default()
        };
        match state.presentation() {
            Presentation::Table {
                flights, updating, ..
            } => {
                assert!(updating);
                assert_eq!(flights.len(), 1);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn error_without_rows_replaces_table() {
        let state = StoreState {
            load: LoadState::Error,
            error: Some("boom".into()),
            ..StoreState::default()
        };
        assert_eq!(
            state.presentation(),
            Presentation::Failed {
                message: "boom".into()
            }
        );
    }

    #[test]
    fn error_with_rows_is_a_banner() {
        let state = StoreState {
            load: LoadState::Error,
            error: Some("boom".into()),
            flights: Arc::new(vec![flight("AB123"), flight("CD456")]),
            ..StoreState::default()
        };
        match state.presentation() {
            Presentation::Table { banner, empty, .. } => {
                assert_eq!(banner.as_deref(), Some("boom"));
                assert!(!empty);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn find_by_flight_number() {
        let state = StoreState {
            flights: Arc::new(vec![flight("AB123")]),
            ..StoreState::default()
        };
        assert!(state.find("AB123").is_some());
        assert!(state.find("ZZ999").is_none());
    }
}
