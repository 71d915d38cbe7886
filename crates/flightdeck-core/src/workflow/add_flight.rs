// ── Add-flight form ──
//
// Closed → Open(draft) → Submitting → Closed, falling back to
// Open(draft, error) when validation or the create call fails.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::{Flight, FlightDraft, Gate, NewFlight, min_departure};
use crate::store::FlightStore;

/// A single edit to one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    FlightNumber(String),
    City(String),
    Country(String),
    AirportCode(String),
    DepartureTime(String),
    Gate(Gate),
}

/// Apply `edit` to `draft`. Pure.
pub fn apply_field_edit(mut draft: FlightDraft, edit: FieldEdit) -> FlightDraft {
    match edit {
        FieldEdit::FlightNumber(v) => draft.flight_number = v,
        FieldEdit::City(v) => draft.city = v,
        FieldEdit::Country(v) => draft.country = v,
        FieldEdit::AirportCode(v) => draft.airport_code = v,
        FieldEdit::DepartureTime(v) => draft.departure_time = v,
        FieldEdit::Gate(g) => draft.gate = g,
    }
    draft
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open {
        draft: FlightDraft,
        error: Option<String>,
    },
    Submitting {
        draft: FlightDraft,
    },
}

/// State machine behind the "Add Flight" form.
#[derive(Debug, Clone, Default)]
pub struct AddFlightForm {
    state: FormState,
    min_departure: Option<DateTime<Utc>>,
}

impl AddFlightForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, FormState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    pub fn draft(&self) -> Option<&FlightDraft> {
        match &self.state {
            FormState::Closed => None,
            FormState::Open { draft, .. } | FormState::Submitting { draft } => Some(draft),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FormState::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Earliest departure a picker should offer, computed on open.
    pub fn min_departure(&self) -> Option<DateTime<Utc>> {
        self.min_departure
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Open with an empty draft. Reopening discards whatever was there.
    pub fn open(&mut self, now: DateTime<Utc>) {
        self.state = FormState::Open {
            draft: FlightDraft::default(),
            error: None,
        };
        self.min_departure = Some(min_departure(now));
    }

    /// The "Add Flight" / "Cancel" button.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        if self.is_open() {
            self.cancel();
        } else {
            self.open(now);
        }
    }

    /// Edit the draft. Ignored unless the form is open and idle.
    pub fn edit(&mut self, edit: FieldEdit) {
        if let FormState::Open { draft, .. } = &mut self.state {
            *draft = apply_field_edit(std::mem::take(draft), edit);
        } else {
            debug!(?edit, "ignoring edit outside an open form");
        }
    }

    /// Validate the draft against `now`.
    ///
    /// On success the form moves to Submitting and the payload is
    /// returned. On failure the form stays open with the message set.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<NewFlight, CoreError> {
        let FormState::Open { draft, error } = &mut self.state else {
            return Err(CoreError::InvalidState {
                message: "the add-flight form is not open".into(),
            });
        };

        match draft.validate(now) {
            Ok(new_flight) => {
                let draft = std::mem::take(draft);
                self.state = FormState::Submitting { draft };
                Ok(new_flight)
            }
            Err(e) => {
                *error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Settle a submission: close on success, reopen with the message and
    /// the draft intact on failure.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        if !self.is_submitting() {
            debug!("finish_submit outside a submission");
            return;
        }
        let FormState::Submitting { draft } = std::mem::take(&mut self.state) else {
            return;
        };
        self.state = match result {
            Ok(()) => FormState::Closed,
            Err(message) => FormState::Open {
                draft,
                error: Some(message),
            },
        };
    }

    /// Validate, create through the store, and refresh on success.
    ///
    /// A failing follow-up refresh does not fail the submission: the
    /// flight was created, and the refresh error is already recorded in
    /// the store's state.
    pub async fn submit(
        &mut self,
        store: &FlightStore,
        now: DateTime<Utc>,
    ) -> Result<Flight, CoreError> {
        let new_flight = self.begin_submit(now)?;

        match store.create(&new_flight).await {
            Ok(created) => {
                self.finish_submit(Ok(()));
                if let Err(e) = store.notify_mutation_succeeded().await {
                    warn!(error = %e, "refresh after create failed");
                }
                Ok(created)
            }
            Err(e) => {
                self.finish_submit(Err(format!("Failed to add flight: {e}")));
                Err(e)
            }
        }
    }

    /// Discard the draft unconditionally.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }
}
