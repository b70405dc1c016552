use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tiplog
/// CLI application to log shifts, tips and wages with SQLite
#[derive(Parser)]
#[command(
    name = "tiplog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple shift logging CLI: track tips and wages and summarize monthly earnings using SQLite",
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

    /// Manage the database (integrity checks, statistics, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a shift
    Add {
        /// Date of the shift (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(
            long = "role",
            short = 'r',
            help = "Role worked: server, host or ta (default from config)"
        )]
        role: Option<String>,

        #[arg(
            long = "hours",
            short = 'H',
            allow_hyphen_values = true,
            help = "Hours worked (greater than 0)"
        )]
        hours: String,

        #[arg(
            long = "tips",
            short = 't',
            allow_hyphen_values = true,
            help = "Tips made (0 or more, ignored for TA)"
        )]
        tips: Option<String>,
    },

    /// Delete every shift logged on a date
    Del {
        /// Date of the shifts to delete (YYYY-MM-DD)
        date: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Monthly totals and average $/hr
    Summary {
        /// Month (YYYY-MM, default: current month)
        month: Option<String>,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },

    /// List the shifts of a month
    List {
        /// Month (YYYY-MM, default: current month)
        month: Option<String>,

        #[arg(long = "json", help = "Print the shifts as JSON")]
        json: bool,
    },

    /// Interactive menu session
    Menu,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Export shift data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (A:B)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
