use clap::Parser;
use std::path::PathBuf;

/// Global command line options.
///
/// Only the options are parsed here. The command name and its positional
/// parameters are collected verbatim and resolved by the command registry.
#[derive(Parser, Debug)]
#[command(
    name = "uhppote-cli",
    about = "Command line tool for UHPPOTE access control controllers",
    long_about = "Retrieves controller status and manages controller settings. Run 'uhppote-cli help' for the list of commands."
)]
pub struct Args {
    /// Configuration file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Displays internal information for diagnosing errors
    #[arg(long)]
    pub debug: bool,

    /// Request timeout in milliseconds (overrides the configuration file)
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Local UDP bind address (overrides the configuration file)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// UDP broadcast address (overrides the configuration file)
    #[arg(long, value_name = "ADDR")]
    pub broadcast: Option<String>,

    /// Command followed by its parameters
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
