//! Flight command handlers.

use std::str::FromStr;

use chrono::Utc;
use owo_colors::OwoColorize;
use tabled::Tabled;

use flightdeck_core::{
    AddFlightForm, FieldEdit, Flight, FlightFilter, FlightStatus, FlightStore, Gate, Presentation,
    StoreState,
};

use crate::cli::{FlightsArgs, FlightsCommand, GlobalOpts, OutputFormat, StatusArg};
use crate::error::CliError;
use crate::output;

use super::util;

const EMPTY_MESSAGE: &str = "No flights available.";
const ERROR_HEADING: &str = "Error loading flight data:";
const UPDATING_CAPTION: &str = "Updating flights...";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct FlightRow {
    #[tabled(rename = "Flight Number")]
    number: String,
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Departure Time")]
    departure: String,
    #[tabled(rename = "Gate")]
    gate: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl FlightRow {
    fn new(f: &Flight, color: bool) -> Self {
        Self {
            number: f.flight_number.clone(),
            destination: f.destination.label(),
            departure: f.departure_date_label(),
            gate: f.gate.to_string(),
            status: paint_status(f.status, color),
        }
    }
}

fn paint_status(status: FlightStatus, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    match status {
        FlightStatus::Scheduled => status.blue().to_string(),
        FlightStatus::Delayed => status.yellow().to_string(),
        FlightStatus::Cancelled => status.red().to_string(),
        FlightStatus::Boarding => status.cyan().to_string(),
        FlightStatus::Departed | FlightStatus::Landed => status.green().to_string(),
    }
}

fn status_filter(arg: StatusArg) -> Option<FlightStatus> {
    match arg {
        StatusArg::All => None,
        StatusArg::Scheduled => Some(FlightStatus::Scheduled),
        StatusArg::Delayed => Some(FlightStatus::Delayed),
        StatusArg::Cancelled => Some(FlightStatus::Cancelled),
        StatusArg::Boarding => Some(FlightStatus::Boarding),
        StatusArg::Departed => Some(FlightStatus::Departed),
        StatusArg::Landed => Some(FlightStatus::Landed),
    }
}

// ── Board rendering ─────────────────────────────────────────────────

/// Print the flights board for `state`: the table, an error banner over
/// stale rows, or the full-board error when nothing is held.
fn render_board(state: &StoreState, global: &GlobalOpts) -> Result<(), CliError> {
    match state.presentation() {
        Presentation::Loading => Ok(()),
        Presentation::Failed { message } => {
            eprintln!("{ERROR_HEADING} {message}");
            Ok(())
        }
        Presentation::Table {
            flights,
            banner,
            updating,
            empty,
        } => {
            if let Some(banner) = banner {
                eprintln!("{ERROR_HEADING} {banner}");
            }
            if updating && !global.quiet {
                eprintln!("{UPDATING_CAPTION}");
            }
            let format = global.format();
            if empty && format == OutputFormat::Table {
                output::print_output(EMPTY_MESSAGE, global.quiet);
                return Ok(());
            }
            let color = output::should_color(&global.color_mode());
            let out = output::render_list(
                &format,
                flights.as_slice(),
                |f| FlightRow::new(f, color),
                |f| f.flight_number.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    store: &FlightStore,
    args: FlightsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FlightsCommand::List { status, city } => {
            let filter = FlightFilter {
                status: status.and_then(status_filter),
                destination_city: city,
            };
            let pb = util::spinner("Loading flights...", global.quiet);
            let result = store.apply_filter(filter).await;
            pb.finish_and_clear();
            result?;
            render_board(&store.snapshot(), global)
        }

        FlightsCommand::Add {
            number,
            city,
            country,
            airport,
            departure,
            gate,
        } => {
            let gate = Gate::from_str(&gate).map_err(|_| CliError::Validation {
                field: "gate".into(),
                reason: format!("'{gate}' is not a gate, expected A1 through C7"),
            })?;

            let mut form = AddFlightForm::new();
            form.open(Utc::now());
            for edit in [
                FieldEdit::FlightNumber(number),
                FieldEdit::City(city),
                FieldEdit::Country(country),
                FieldEdit::AirportCode(airport),
                FieldEdit::DepartureTime(departure),
                FieldEdit::Gate(gate),
            ] {
                form.edit(edit);
            }

            let pb = util::spinner("Adding flight...", global.quiet);
            let result = form.submit(store, Utc::now()).await;
            pb.finish_and_clear();
            let created = result?;

            if !global.quiet {
                eprintln!(
                    "✓ Flight {} added ({})",
                    created.flight_number, created.status
                );
            }
            render_board(&store.snapshot(), global)
        }

        FlightsCommand::Delete { number } => {
            if !global.yes {
                util::ensure_interactive("flights delete")?;
                let prompt = delete_prompt(store, &number).await;
                if !util::confirm(&prompt, "flights delete", false)? {
                    return Ok(());
                }
            }

            store.delete(&number).await?;
            if !global.quiet {
                eprintln!("✓ Flight {number} deleted");
            }
            Ok(())
        }
    }
}

/// Confirmation text for a delete. Loads the board so the prompt can name
/// the destination; a failed load only costs that detail.
async fn delete_prompt(store: &FlightStore, number: &str) -> String {
    if let Err(e) = store.refresh(None).await {
        tracing::debug!(error = %e, "board load before delete failed");
    }
    match store.snapshot().find(number) {
        Some(f) => format!(
            "Delete flight {} to {}?",
            f.flight_number,
            f.destination.label()
        ),
        None => format!("Delete flight {number}?"),
    }
}
