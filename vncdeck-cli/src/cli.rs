//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use vncdeck_core::config::CONFIG_DIR_ENV;

/// `VncDeck` command-line interface for managing VNC connections
#[derive(Parser)]
#[command(name = "vncdeck-cli")]
#[command(author, version, about = "VncDeck command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = CONFIG_DIR_ENV)]
    pub config: Option<PathBuf>,

    /// Viewer executable to use instead of the configured or detected one
    #[arg(long, global = true, value_name = "PATH")]
    pub viewer: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all connections
    #[command(about = "List all saved connections")]
    List {
        /// Output format for the connection list
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Show connection details
    #[command(about = "Show details of a connection")]
    Show {
        /// Connection name
        name: String,
    },

    /// Add a new connection
    #[command(about = "Add a new connection")]
    Add {
        /// Name for the new connection
        #[arg(short, long)]
        name: String,

        /// Host address (hostname or IP)
        #[arg(short = 'H', long)]
        host: String,

        /// Port number
        #[arg(short, long, default_value_t = 5900, allow_negative_numbers = true)]
        port: i64,

        /// Username passed to the viewer
        #[arg(short, long)]
        user: Option<String>,

        /// Display, kept for reference only
        #[arg(short, long)]
        display: Option<String>,
    },

    /// Update an existing connection
    #[command(about = "Update fields of an existing connection")]
    Update {
        /// Name of the connection to update
        name: String,

        /// New name
        #[arg(long)]
        new_name: Option<String>,

        /// New host address
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// New port
        #[arg(short, long, allow_negative_numbers = true)]
        port: Option<i64>,

        /// New username
        #[arg(short, long, conflicts_with = "clear_user")]
        user: Option<String>,

        /// New display
        #[arg(short, long, conflicts_with = "clear_display")]
        display: Option<String>,

        /// Remove the username
        #[arg(long)]
        clear_user: bool,

        /// Remove the display
        #[arg(long)]
        clear_display: bool,
    },

    /// Delete a connection
    #[command(about = "Delete every connection with the given name")]
    Delete {
        /// Connection name
        name: String,
    },

    /// Launch the viewer for a connection
    #[command(about = "Open a connection in the VNC viewer")]
    Connect {
        /// Connection name; defaults to the last used connection
        name: Option<String>,

        /// Show the command that would be executed without running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the last used connection
    #[command(about = "Show the most recently launched connection")]
    Last,

    /// Show viewer information
    #[command(about = "Show the detected viewer, its availability and version")]
    Viewer {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completions for bash, zsh, fish, etc.")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate man page
    #[command(about = "Generate man page and write to stdout")]
    Manpage,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for scripting
    Json,
    /// CSV format for spreadsheets
    Csv,
}
