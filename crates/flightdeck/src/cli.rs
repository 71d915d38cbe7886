//! Clap derive structures for the `flightdeck` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. This
//! file is also compiled by `build.rs`, so it may only depend on `clap`
//! and `clap_complete`.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// flightdeck -- flight board administration from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "flightdeck",
    version,
    about = "List, add, and delete flights on the flight board",
    long_about = "Administer the flight board from the command line.\n\n\
        Talks to the flights REST service (GET/POST/DELETE /flights) and\n\
        renders the board as a table or as JSON/YAML for scripting.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "FLIGHTDECK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Flights API root, e.g. http://localhost:8080/api (overrides profile)
    #[arg(long, short = 'u', env = "FLIGHTDECK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "FLIGHTDECK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "FLIGHTDECK_INSECURE", global = true)]
    pub insecure: bool,
}

impl GlobalOpts {
    pub fn format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Status filter choices. `all` clears the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// All statuses (no filter)
    All,
    Scheduled,
    Delayed,
    Cancelled,
    Boarding,
    Departed,
    Landed,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List, add, and delete flights
    #[command(alias = "f")]
    Flights(FlightsArgs),

    /// List boarding gates
    Gates,

    /// List flight statuses
    Statuses,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FLIGHTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FlightsArgs {
    #[command(subcommand)]
    pub command: FlightsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FlightsCommand {
    /// List flights, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Only flights with this status
        #[arg(long, short = 's', ignore_case = true)]
        status: Option<StatusArg>,

        /// Only flights to this destination city
        #[arg(long, short = 'c')]
        city: Option<String>,
    },

    /// Add a flight (status is assigned by the service)
    Add {
        /// Flight number, e.g. AB123
        #[arg(long, short = 'n')]
        number: String,

        /// Destination city
        #[arg(long)]
        city: String,

        /// Destination country
        #[arg(long)]
        country: String,

        /// Destination airport code, e.g. CDG
        #[arg(long)]
        airport: String,

        /// Departure time, YYYY-MM-DDTHH:MM (UTC) or RFC 3339
        #[arg(long, short = 'd')]
        departure: String,

        /// Boarding gate, A1 through C7
        #[arg(long, short = 'g', default_value = "A1")]
        gate: String,
    },

    /// Delete a flight by number
    #[command(alias = "rm")]
    Delete {
        /// Flight number
        number: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create a profile (prompts unless --api-url is given)
    Init,

    /// Print the config file as TOML (or JSON/YAML with -o)
    Show,

    /// Print the config file path
    Path,

    /// Set a value on the active profile
    Set {
        /// Config key: api_url, ca_cert, or insecure
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    #[command(alias = "use")]
    SetDefault {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
