// ── Flight collection store ──
//
// Owns the local projection of the remote flight collection. Every read
// and write between callers and the flights service goes through here.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use url::Url;

use flightdeck_api::{CreateFlightRequest, FlightsClient, ListFlightsQuery};

use super::state::{LoadState, StoreState};
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::model::{Flight, FlightFilter, NewFlight};
use crate::stream::StateStream;

/// Result of a `refresh` that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response was applied; the store now holds `count` records.
    Applied { count: usize },
    /// A newer refresh was issued while this one was in flight, so its
    /// response was dropped.
    Superseded,
}

/// Reactive store for the flight collection.
///
/// All methods take `&self`; share it behind an `Arc` when several tasks
/// need it. State changes are broadcast to subscribers via a `watch`
/// channel.
pub struct FlightStore {
    client: FlightsClient,
    state: watch::Sender<StoreState>,
    /// Sequence number of the most recently issued refresh.
    refresh_seq: AtomicU64,
}

impl FlightStore {
    /// Build a store talking to the service described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let client = FlightsClient::new(config.api_url.as_str(), &config.transport())?;
        Ok(Self::with_client(client))
    }

    /// Build a store around an existing API client.
    pub fn with_client(client: FlightsClient) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            client,
            state,
            refresh_seq: AtomicU64::new(0),
        }
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    // ── Observation ──────────────────────────────────────────────────

    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.state.subscribe())
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Re-fetch the collection.
    ///
    /// Fields present in `filter` replace the stored criteria; omitted
    /// fields keep their stored value. Held records stay visible while
    /// loading and survive a failed fetch.
    pub async fn refresh(&self, filter: Option<FlightFilter>) -> Result<RefreshOutcome, CoreError> {
        self.run_refresh(|current| match filter {
            Some(update) => current.merged(update),
            None => current.clone(),
        })
        .await
    }

    /// Replace the stored criteria wholesale, then refresh.
    pub async fn apply_filter(&self, criteria: FlightFilter) -> Result<RefreshOutcome, CoreError> {
        self.run_refresh(|_| criteria.normalized()).await
    }

    /// Drop all criteria, then refresh.
    pub async fn clear_filter(&self) -> Result<RefreshOutcome, CoreError> {
        self.run_refresh(|_| FlightFilter::default()).await
    }

    /// Refresh with the stored criteria after a successful create, so the
    /// new record shows up with its server-assigned status.
    pub async fn notify_mutation_succeeded(&self) -> Result<RefreshOutcome, CoreError> {
        debug!("mutation succeeded, refreshing");
        self.refresh(None).await
    }

    async fn run_refresh(
        &self,
        next_filter: impl FnOnce(&FlightFilter) -> FlightFilter,
    ) -> Result<RefreshOutcome, CoreError> {
        let seq = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let mut active = FlightFilter::default();
        self.state.send_modify(|s| {
            s.filter = next_filter(&s.filter);
            s.load = LoadState::Loading;
            s.error = None;
            active.clone_from(&s.filter);
        });
        debug!(seq, filter = ?active, "refreshing flights");

        let result = self.fetch(&active).await;

        match result {
            Ok(flights) => {
                let count = flights.len();
                let applied = self.apply_if_current(seq, |s| {
                    s.flights = Arc::new(flights);
                    s.load = LoadState::Success;
                    s.error = None;
                    s.last_refreshed = Some(Utc::now());
                });
                if applied {
                    info!(seq, count, "flights refreshed");
                    Ok(RefreshOutcome::Applied { count })
                } else {
                    Ok(RefreshOutcome::Superseded)
                }
            }
            Err(err) => {
                let message = format!("Failed to fetch flights: {err}");
                let applied = self.apply_if_current(seq, |s| {
                    s.load = LoadState::Error;
                    s.error = Some(message);
                });
                if applied {
                    warn!(seq, error = %err, "flight refresh failed");
                    Err(err)
                } else {
                    Ok(RefreshOutcome::Superseded)
                }
            }
        }
    }

    /// Apply `update` only if `seq` is still the latest issued refresh.
    /// The check runs under the channel's write lock, so a refresh issued
    /// concurrently either supersedes this one or is applied after it.
    fn apply_if_current(&self, seq: u64, update: impl FnOnce(&mut StoreState)) -> bool {
        let applied = self.state.send_if_modified(|s| {
            if self.refresh_seq.load(Ordering::SeqCst) != seq {
                return false;
            }
            update(s);
            true
        });
        if !applied {
            warn!(seq, "discarding stale refresh result");
        }
        applied
    }

    async fn fetch(&self, filter: &FlightFilter) -> Result<Vec<Flight>, CoreError> {
        let query = ListFlightsQuery::from(filter);
        let raw = self.client.list_flights(&query).await?;
        let flights = raw
            .into_iter()
            .map(Flight::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dedupe_by_number(flights))
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Delete a flight on the service, then drop it from the held set
    /// without re-fetching.
    ///
    /// Returns whether a held record was removed; deleting a number the
    /// store does not hold is not an error. On failure the held set is
    /// untouched and the message is recorded in state.
    pub async fn delete(&self, flight_number: &str) -> Result<bool, CoreError> {
        match self.client.delete_flight(flight_number).await {
            Ok(()) => {
                let removed = self.state.send_if_modified(|s| {
                    if s.find(flight_number).is_none() {
                        return false;
                    }
                    let kept: Vec<Flight> = s
                        .flights
                        .iter()
                        .filter(|f| f.flight_number != flight_number)
                        .cloned()
                        .collect();
                    s.flights = Arc::new(kept);
                    true
                });
                info!(flight_number, removed, "flight deleted");
                Ok(removed)
            }
            Err(e) => {
                let err = if e.is_not_found() {
                    CoreError::FlightNotFound {
                        flight_number: flight_number.to_owned(),
                    }
                } else {
                    CoreError::from(e)
                };
                warn!(flight_number, error = %err, "flight delete failed");
                let message = format!("Failed to delete flight {flight_number}: {err}");
                self.state.send_modify(|s| {
                    s.load = LoadState::Error;
                    s.error = Some(message);
                });
                Err(err)
            }
        }
    }

    /// Create a flight on the service and return its canonical record.
    ///
    /// Held state is not touched; follow up with
    /// [`notify_mutation_succeeded`](Self::notify_mutation_succeeded).
    pub async fn create(&self, new_flight: &NewFlight) -> Result<Flight, CoreError> {
        let req = CreateFlightRequest::from(new_flight);
        let created = Flight::try_from(self.client.create_flight(&req).await?)?;
        info!(
            flight_number = %created.flight_number,
            status = %created.status,
            "flight created"
        );
        Ok(created)
    }
}

/// Keep the first record for each flight number.
fn dedupe_by_number(flights: Vec<Flight>) -> Vec<Flight> {
    let mut seen = HashSet::with_capacity(flights.len());
    flights
        .into_iter()
        .filter(|f| {
            let fresh = seen.insert(f.flight_number.clone());
            if !fresh {
                warn!(flight_number = %f.flight_number, "dropping duplicate flight record");
            }
            fresh
        })
        .collect()
}
