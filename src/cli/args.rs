use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aegis-notice",
    about = "Update notice for the AEGIS client",
    long_about = "Checks the installed AEGIS client against the latest GitHub release and shows a dismissible update notice",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Keep dismissal and install path in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check for a newer release and show the notice
    Check {
        /// Print the check result as JSON
        #[arg(long)]
        json: bool,

        /// Skip the startup delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Show local and latest versions and the dismissal record
    Status,

    /// Hide the notice for a release
    Dismiss {
        /// Version to dismiss (defaults to the latest release)
        #[arg(value_name = "VERSION")]
        release: Option<String>,

        /// Forget any previous dismissal
        #[arg(long, conflicts_with = "release")]
        reset: bool,
    },

    /// Open the releases page
    Open,

    /// Manage the client installation path
    Path {
        #[command(subcommand)]
        command: PathCommand,
    },

    /// Compare two versions (prints <, = or >)
    Compare { left: String, right: String },

    /// Manage settings
    Settings {
        #[command(subcommand)]
        command: SettingsSubcommand,
    },

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum PathCommand {
    /// Set the client installation path
    Set { path: PathBuf },
    /// Show the client installation path
    Show,
    /// Remove the client installation path
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum SettingsSubcommand {
    /// Set a setting value
    Set { key: String, value: String },
    /// Get a setting value
    Get { key: String },
    /// Show all settings
    Show,
    /// Reset setting to default
    Reset { key: String },
}
