// ── User workflows ──
//
// Explicit state machines driven by UI events, testable without any
// rendering harness.

mod add_flight;

pub use add_flight::{AddFlightForm, FieldEdit, FormState, apply_field_edit};
