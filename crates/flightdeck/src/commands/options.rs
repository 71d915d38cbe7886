//! Gate and status listings, the option lists behind the form and filter
//! pickers.

use tabled::Tabled;

use flightdeck_core::{FlightStatus, Gate};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct GateRow {
    #[tabled(rename = "Gate")]
    gate: String,
    #[tabled(rename = "Concourse")]
    concourse: String,
}

impl From<&Gate> for GateRow {
    fn from(g: &Gate) -> Self {
        let code = g.to_string();
        Self {
            concourse: code.chars().take(1).collect(),
            gate: code,
        }
    }
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Final")]
    is_final: String,
}

impl From<&FlightStatus> for StatusRow {
    fn from(s: &FlightStatus) -> Self {
        Self {
            status: s.to_string(),
            is_final: if s.is_final() { "yes" } else { "no" }.into(),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn gates(global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.format(),
        Gate::all(),
        |g| GateRow::from(g),
        ToString::to_string,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn statuses(global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.format(),
        FlightStatus::all(),
        |s| StatusRow::from(s),
        ToString::to_string,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
