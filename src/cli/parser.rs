use crate::export::ExportFormat;
use crate::models::field::EditableField;
use crate::models::view::SortKey;
use clap::{Parser, Subcommand};

/// Command-line interface definition for taskgrid
/// Twenty rows a day: plan, track and review your tasks
#[derive(Parser)]
#[command(
    name = "taskgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily task grid: plan and track up to twenty tasks a day, with spreadsheet import/export",
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
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the grid
    List {
        /// Status filter: All, Pending, Completed, "Not Started", "In Progress" or Done
        #[arg(long, short, default_value = "All")]
        status: String,

        /// Priority filter (case-insensitive); "All" shows every priority
        #[arg(long, short, default_value = "All")]
        priority: String,

        /// Project category filter (case-insensitive); "All" shows every category
        #[arg(long, short, default_value = "All")]
        category: String,

        /// Order rows by this column; rows without an activity stay at the bottom.
        /// Repeating a column flips its direction, like clicking a header again.
        #[arg(long, value_enum)]
        sort: Vec<SortKey>,

        /// Force descending order (requires --sort)
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Edit one cell of the grid
    Set {
        /// Row id (1-20)
        id: u32,

        /// Column to edit
        #[arg(value_enum)]
        field: EditableField,

        /// New value; times as HH:MM, dates as YYYY-MM-DD, "" clears the cell
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Tick the completion box of a row
    Done {
        /// Row id (1-20)
        id: u32,

        /// Clear the completion box instead
        #[arg(long)]
        undo: bool,
    },

    /// Record the actual start time of a row
    Start {
        /// Row id (1-20)
        id: u32,

        /// Start time (HH:MM); defaults to now
        time: Option<String>,
    },

    /// Record the actual end time of a row
    Stop {
        /// Row id (1-20)
        id: u32,

        /// End time (HH:MM); defaults to now
        time: Option<String>,
    },

    /// Clear every row and start a fresh grid for today
    Reset {
        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show planned and actual hours and the completion percentage
    Totals,

    /// Export the tasks that have an activity
    Export {
        /// Export format (defaults to the file extension, then xlsx)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file path (defaults to `export_file` from the configuration)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace the grid with the rows of a spreadsheet (.xlsx, .xls, .csv)
    Import {
        /// File to import
        file: String,
    },
}
