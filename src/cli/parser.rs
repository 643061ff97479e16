use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeyourwork
/// Start/stop a timer and accumulate hours per task in a CSV sheet
#[derive(Parser)]
#[command(
    name = "timeyourwork",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time your work: a start/stop timer that sums hours per task into a CSV sheet",
    long_about = None
)]
pub struct Cli {
    /// Override the sheet path
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Override the state database path (running timer, internal log)
    #[arg(global = true, long = "state")]
    pub state: Option<String>,

    /// Header label of the task column
    #[arg(global = true, long = "key-label")]
    pub key_label: Option<String>,

    /// Header label of the time column
    #[arg(global = true, long = "value-label")]
    pub value_label: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, state database and an empty sheet
    Init,

    /// Create an empty sheet holding only the two header labels
    Create,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Start the timer
    Start {
        /// Task the elapsed time will be saved to (can be given at stop)
        task: Option<String>,
    },

    /// Stop the timer and add the elapsed time to a task
    Stop {
        /// Task name (overrides the one given at start)
        task: Option<String>,

        #[arg(long = "discard", help = "Stop without saving the elapsed time")]
        discard: bool,

        #[arg(long = "create", help = "Create the sheet if it does not exist")]
        create: bool,
    },

    /// Show the running timer
    Status,

    /// Add a duration to a task without using the timer
    Add {
        /// Task name
        task: String,

        /// Duration: 90 (seconds), 90s, 15m, 1h30m, 01:30, 1:02:03
        duration: String,

        #[arg(long = "create", help = "Create the sheet if it does not exist")]
        create: bool,
    },

    /// List the task names found under the task header
    Tasks,

    /// Show hours per task and the total
    Show,

    /// Export hours per task
    Export {
        #[arg(long = "format", value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long = "file", help = "Output file path")]
        file: String,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Copy the sheet to a backup file
    Backup {
        #[arg(long = "file", help = "Backup file path")]
        file: String,

        #[arg(long = "compress", help = "Store the backup as a .zip archive")]
        compress: bool,

        #[arg(long = "force", help = "Overwrite the backup file without asking")]
        force: bool,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
