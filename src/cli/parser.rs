use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rLessonGap
/// CLI application to keep a driving-lesson book and check travel between lessons
#[derive(Parser)]
#[command(
    name = "rlessongap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep a driving-lesson book and flag back-to-back lessons you cannot reach in time",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the lesson book and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file and add missing fields"
        )]
        check: bool,

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

    /// Book a lesson (travel to/from the neighbouring lessons is checked first)
    Add {
        /// Date of the lesson (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long = "student", short = 's', help = "Student name")]
        student: Option<String>,

        #[arg(
            long = "at",
            value_name = "LAT,LON",
            allow_hyphen_values = true,
            help = "Meeting point as decimal degrees, e.g. -23.55,-46.63"
        )]
        at: Option<String>,

        #[arg(long = "address", help = "Meeting point address (display only)")]
        address: Option<String>,
    },

    /// Check whether a lesson could be booked without travel problems
    Check {
        /// Date of the candidate lesson (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(
            long = "at",
            value_name = "LAT,LON",
            allow_hyphen_values = true,
            help = "Candidate meeting point"
        )]
        at: Option<String>,
    },

    /// Delete or cancel lessons
    Del {
        /// Delete every lesson on this date (YYYY-MM-DD)
        #[arg(required_unless_present = "id", conflicts_with = "id")]
        date: Option<String>,

        #[arg(long = "id", help = "Lesson id to delete")]
        id: Option<i64>,

        #[arg(
            long = "cancel",
            requires = "id",
            help = "Mark the lesson as cancelled instead of deleting it"
        )]
        cancel: bool,
    },

    /// List lessons day by day with the travel between them
    List {
        #[arg(
            long,
            short,
            help = "Filter by period (YYYY, YYYY-MM, YYYY-MM-DD, A:B range, all)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's lessons")]
        now: bool,
    },

    /// Scan the lesson book (or a schedule file) for tight or impossible transfers
    Scan {
        #[arg(
            long,
            short,
            conflicts_with = "file",
            help = "Period to scan (default: current month)"
        )]
        period: Option<String>,

        #[arg(long, value_name = "FILE", help = "Scan a JSON or CSV schedule file instead")]
        file: Option<String>,
    },

    /// Estimate the drive between two meeting points
    Estimate {
        #[arg(long = "from", value_name = "LAT,LON", allow_hyphen_values = true)]
        from: Option<String>,

        #[arg(long = "to", value_name = "LAT,LON", allow_hyphen_values = true)]
        to: Option<String>,

        #[arg(
            long = "gap",
            allow_negative_numbers = true,
            help = "Available minutes, to classify against the estimate"
        )]
        gap: Option<i64>,
    },

    /// Export the transfers between lessons
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
