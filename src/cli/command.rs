use crate::cli::arguments::Arguments;
use crate::cli::context::Context;
use crate::domain::error::CliResult;
use crate::infrastructure::config::DEFAULT_CONFIG;
use async_trait::async_trait;

/// Name the tool is invoked as in help text and examples
pub const TOOL: &str = "uhppote-cli";

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report
    Done,
    /// Text for standard output
    Print(String),
}

/// A sub-command.
///
/// Commands are stateless: everything they act on arrives through the
/// [`Context`] and the positional [`Arguments`]. `execute` never writes to
/// the console, the dispatcher renders the returned outcome or error.
#[async_trait]
pub trait Command: Send + Sync {
    /// Exact name the command is dispatched by
    fn name(&self) -> &'static str;

    /// Parameter grammar, e.g. `<serial number>`
    fn usage(&self) -> &'static str;

    /// One line summary for the command listing
    fn description(&self) -> &'static str;

    /// Whether the command refuses to run without a configuration file
    fn requires_config(&self) -> bool;

    /// Full help text including at least one example invocation
    fn help(&self) -> String;

    async fn execute(&self, ctx: &Context, args: &Arguments) -> CliResult<Outcome>;
}

/// Global options section shared by the command help texts
pub fn options_help() -> String {
    format!(
        "  Options:\n\
         \n\
         \x20   --config  File path for the configuration file containing the controller configuration\n\
         \x20             (defaults to {})\n\
         \x20   --debug   Displays internal information for diagnosing errors\n",
        DEFAULT_CONFIG
    )
}
