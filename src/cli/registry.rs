use crate::cli::arguments::Arguments;
use crate::cli::command::{Command, Outcome, TOOL};
use crate::cli::commands::{GetStatus, ListControllers, SetPcControl};
use crate::cli::context::Context;
use crate::cli::output::OutputWriter;
use crate::domain::config::Config;
use crate::domain::error::{CliError, CliResult};
use crate::exitcode;
use crate::infrastructure::config::DEFAULT_CONFIG;
use std::collections::BTreeMap;
use tracing::{debug, error};

const HELP: &str = "help";
const VERSION: &str = "version";

/// Commands answered by the registry itself: (name, usage, description).
/// They never touch a controller or the configuration.
const BUILTINS: [(&str, &str, &str); 2] = [
    (HELP, "<command>", "Displays the help information for a command"),
    (VERSION, "", "Displays the current version"),
];

/// What the first command line token names
pub enum Resolution<'a> {
    /// Answered without a controller or configuration
    Builtin(Outcome),
    /// Registered command with the remaining tokens
    Command(&'a dyn Command, Arguments),
}

/// Holds every command by name and routes invocations to them
pub struct Registry {
    commands: BTreeMap<&'static str, Box<dyn Command>>,
}

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Add a command.
    ///
    /// # Panics
    ///
    /// Panics if the name is already taken.
    pub fn register(mut self, command: impl Command + 'static) -> Self {
        let name = command.name();
        assert!(
            BUILTINS.iter().all(|(builtin, _, _)| *builtin != name),
            "'{}' is a reserved command name",
            name
        );
        assert!(
            self.commands.insert(name, Box::new(command)).is_none(),
            "duplicate command '{}'",
            name
        );
        self
    }

    /// Exact match lookup
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered commands in name order, built-ins excluded
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| c.as_ref())
    }

    /// Top level help: one line per command followed by the global options
    pub fn listing(&self) -> String {
        let entries: Vec<(&str, &str)> = BUILTINS
            .iter()
            .map(|(name, _, description)| (*name, *description))
            .chain(self.commands().map(|c| (c.name(), c.description())))
            .collect();
        let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        let mut text = format!("Usage: {} [options] <command> <parameters>\n\n  Commands:\n\n", TOOL);
        for (name, description) in entries {
            text.push_str(&format!("    {:<width$}  {}\n", name, description, width = width));
        }
        text.push_str(&format!(
            "\n  Options:\n\n\
             \x20   --config <path>     Configuration file (defaults to {})\n\
             \x20   --debug             Displays internal information for diagnosing errors\n\
             \x20   --timeout <ms>      Request timeout in milliseconds\n\
             \x20   --bind <addr>       Local UDP bind address\n\
             \x20   --broadcast <addr>  UDP broadcast address\n\
             \n  Use '{} help <command>' for the command parameters\n",
            DEFAULT_CONFIG, TOOL
        ));
        text
    }

    fn help(&self, args: &Arguments) -> CliResult<Outcome> {
        let Some(name) = args.get(0) else {
            return Ok(Outcome::Print(self.listing()));
        };

        if let Some((name, usage, description)) = BUILTINS.iter().find(|(builtin, _, _)| *builtin == name) {
            let usage = if usage.is_empty() { String::new() } else { format!(" {}", usage) };
            let example = if *name == HELP { " get-status" } else { "" };
            return Ok(Outcome::Print(format!(
                "Usage: {tool} {name}{usage}\n\n {description}\n\n  Examples:\n\n    {tool} {name}{example}\n",
                tool = TOOL,
            )));
        }

        self.lookup(name)
            .map(|command| Outcome::Print(command.help()))
            .ok_or_else(|| CliError::UnknownCommand(name.to_string()))
    }

    /// Match the first token of `argv` against the built-ins and the
    /// registered commands. Needs neither a controller nor a configuration.
    pub fn resolve(&self, argv: &[String]) -> CliResult<Resolution<'_>> {
        let (name, rest) = argv.split_first().ok_or(CliError::MissingCommand)?;
        let args = Arguments::new(rest.iter().cloned());

        match name.as_str() {
            HELP => self.help(&args).map(Resolution::Builtin),
            VERSION => Ok(Resolution::Builtin(Outcome::Print(format!(
                "{} {}",
                TOOL,
                env!("CARGO_PKG_VERSION")
            )))),
            _ => self
                .lookup(name)
                .map(|command| Resolution::Command(command, args))
                .ok_or_else(|| CliError::UnknownCommand(name.clone())),
        }
    }

    /// Refuse a config-requiring command when no configuration was found
    pub fn check_config(command: &dyn Command, config: Option<&Config>) -> CliResult<()> {
        if command.requires_config() && config.is_none() {
            return Err(CliError::ConfigurationRequired {
                command: command.name().to_string(),
            });
        }
        Ok(())
    }

    /// Resolve and execute the command named by the first token of `argv`
    pub async fn dispatch(&self, ctx: &Context, argv: &[String]) -> CliResult<Outcome> {
        match self.resolve(argv)? {
            Resolution::Builtin(outcome) => Ok(outcome),
            Resolution::Command(command, args) => {
                Self::check_config(command, ctx.config())?;

                debug!("Executing '{}' with {} arguments", command.name(), args.len());
                command.execute(ctx, &args).await
            }
        }
    }

    /// Render a dispatch result and return the process exit code
    pub fn report<W: OutputWriter>(&self, result: CliResult<Outcome>, debug: bool, writer: &mut W) -> i32 {
        let err = match result {
            Ok(outcome) => match writer.write_outcome(&outcome) {
                Ok(()) => return exitcode::OK,
                Err(e) => CliError::from(e),
            },
            Err(err) => err,
        };

        if let Err(e) = writer.write_error(&err, debug) {
            error!("Failed to report error '{}': {}", err, e);
        }
        if err.wants_listing() {
            if let Err(e) = writer.write_help(&self.listing()) {
                error!("Failed to write command listing: {}", e);
            }
        }

        err.exit_code()
    }

    /// Dispatch, render the result and return the process exit code
    pub async fn run<W: OutputWriter>(&self, ctx: &Context, argv: &[String], writer: &mut W) -> i32 {
        let result = self.dispatch(ctx, argv).await;
        self.report(result, ctx.debug(), writer)
    }
}

impl Default for Registry {
    /// Registry with every command the tool provides
    fn default() -> Self {
        Self::new()
            .register(GetStatus)
            .register(SetPcControl)
            .register(ListControllers)
    }
}
