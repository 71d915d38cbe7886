mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flightdeck_core::FlightStore;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(mut cli: Cli) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    config::apply_defaults(&mut cli.global, &cfg);
    let global = cli.global;

    match cli.command {
        Command::Config(args) => commands::config_cmd::handle(args, &global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "flightdeck", &mut std::io::stdout());
            Ok(())
        }

        // Static reference data, no service round-trip.
        Command::Gates => commands::options::gates(&global),
        Command::Statuses => commands::options::statuses(&global),

        Command::Flights(args) => {
            let client_config = config::resolve_client_config(&global, &cfg)?;
            let store = FlightStore::new(&client_config)?;
            tracing::debug!(api_url = %store.base_url(), "dispatching flights command");
            commands::flights::handle(&store, args, &global).await
        }
    }
}
