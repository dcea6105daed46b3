use crate::export::{ExportFormat, ExportView};
use clap::{Parser, Subcommand};

/// Command-line interface definition for geoattend
/// GPS attendance tracker: daily sessions and live map clusters over SQLite
#[derive(Parser)]
#[command(
    name = "geoattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "GPS attendance tracker: record check-ins/check-outs, rebuild daily sessions and cluster map markers using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the employee directory
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record a check-in (entrada) or check-out (salida)
    Add {
        /// Employee id (cedula)
        employee: String,

        /// entrada | salida (also accepts in | out)
        kind: String,

        #[arg(long = "place", help = "Named place of the event")]
        place: String,

        #[arg(long = "lat", allow_hyphen_values = true, help = "Latitude in decimal degrees")]
        lat: f64,

        #[arg(long = "lng", allow_hyphen_values = true, help = "Longitude in decimal degrees")]
        lng: f64,

        #[arg(
            long = "at",
            help = "Event time (RFC 3339 or 'YYYY-MM-DD HH:MM[:SS]' in the configured offset); default now"
        )]
        at: Option<String>,
    },

    /// Bulk-load events from a CSV file (bad rows are skipped)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Per-day session history of one employee
    History {
        /// Employee id (cedula)
        employee: String,

        #[arg(long, short = 'd', allow_hyphen_values = true, help = "Lookback window in days (1-90)")]
        days: Option<i64>,

        #[arg(long = "as-of", value_name = "DATE", help = "Last day of the window (YYYY-MM-DD); default today")]
        as_of: Option<String>,

        #[arg(long, help = "Print the JSON history view")]
        json: bool,
    },

    /// Proximity-clustered map markers for one date
    Map {
        #[arg(long, value_name = "DATE", help = "Snapshot date (YYYY-MM-DD); default today")]
        date: Option<String>,

        #[arg(long, help = "Print the JSON map view")]
        json: bool,
    },

    /// Daily statistics panel
    Stats {
        #[arg(long, value_name = "DATE", help = "Snapshot date (YYYY-MM-DD); default today")]
        date: Option<String>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Export the history or map view to a file
    Export {
        #[arg(long, value_enum)]
        view: ExportView,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Employee id (history view)")]
        employee: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Lookback window in days (history view)")]
        days: Option<i64>,

        #[arg(long = "as-of", value_name = "DATE", help = "Last day of the history window")]
        as_of: Option<String>,

        #[arg(long, value_name = "DATE", help = "Snapshot date (map view)")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Register an employee
    Add {
        /// Employee id (cedula)
        id: String,
        /// Full name
        name: String,
    },

    /// List registered employees
    List,
}
