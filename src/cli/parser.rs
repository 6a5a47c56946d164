use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for triplogger
/// CLI client for a trucking trip-planning API with ELD log rendering
#[derive(Parser)]
#[command(
    name = "triplogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan trucking trips via a remote API and render ELD daily log sheets in the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override the trip API base URL (useful for tests or staging)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Submit a new trip to the planning API and show the result
    Plan {
        /// Where the driver currently is
        current_location: String,

        /// Pickup location
        pickup_location: String,

        /// Dropoff location
        dropoff_location: String,

        /// Hours already used in the current 70-hour/8-day cycle
        #[arg(long = "cycle-used", value_name = "HRS")]
        cycle_used_hrs: f64,
    },

    /// List previously created trips
    List,

    /// Show a trip: route summary, ELD daily log sheets and planned stops
    Show {
        /// Trip ID to fetch from the API
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        trip_id: Option<i64>,

        /// Read the trip from a local JSON file instead of the API
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Show only this day of the log (1-based)
        #[arg(long)]
        day: Option<usize>,
    },

    /// Export a trip's positioned log entries
    Export {
        /// Trip ID to fetch from the API
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        trip_id: Option<i64>,

        /// Read the trip from a local JSON file instead of the API
        #[arg(long, value_name = "FILE")]
        input: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
