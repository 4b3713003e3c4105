use crate::export::ExportFormat;
use crate::models::ViewMode;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for walkcal
/// Walker schedule calendar: day, week and month views of walks and time off
#[derive(Parser)]
#[command(
    name = "walkcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Walker schedule calendar: project walks and time-off requests into day, week and month grids",
    long_about = None
)]
pub struct Cli {
    /// Override the snapshot file (JSON with `walks` and `holidayRequests`)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Only show walks and time off of this walker
    #[arg(global = true, long = "walker")]
    pub walker: Option<String>,

    /// Override today's date (YYYY-MM-DD), used for the upcoming filter and `nav today`
    #[arg(global = true, long = "today")]
    pub today: Option<String>,

    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Disable ANSI colors in calendar output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NavDirection {
    Next,
    Prev,
    Today,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file and an empty snapshot
    Init {
        #[arg(long = "force", help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "fix",
            requires = "check",
            help = "Write missing fields with their default values"
        )]
        fix: bool,
    },

    /// Show the schedule grid
    View {
        #[arg(long, short = 'm', value_enum, help = "View mode (default from config)")]
        mode: Option<ViewMode>,

        #[arg(long, short = 'd', help = "Reference date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "all", help = "Include past, completed and cancelled walks")]
        all: bool,

        #[arg(long = "json", help = "Print the view as JSON")]
        json: bool,
    },

    /// Move the calendar cursor and print the new reference date and title
    Nav {
        #[arg(value_enum)]
        direction: NavDirection,

        #[arg(long, short = 'm', value_enum)]
        mode: Option<ViewMode>,

        #[arg(long, short = 'd', help = "Current reference date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Compute a walk's end time from its start (HH:MM) and duration in minutes
    EndTime { start: String, minutes: u32 },

    /// Export the schedule grid
    Export {
        #[arg(long, value_enum, help = "Export format (default: from file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, help = "Output file path")]
        file: String,

        #[arg(long, short = 'm', value_enum)]
        mode: Option<ViewMode>,

        #[arg(long, short = 'd')]
        date: Option<String>,

        #[arg(long = "all", help = "Include past, completed and cancelled walks")]
        all: bool,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}
