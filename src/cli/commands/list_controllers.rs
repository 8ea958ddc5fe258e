use crate::cli::arguments::Arguments;
use crate::cli::command::{options_help, Command, Outcome, TOOL};
use crate::cli::context::Context;
use crate::domain::error::{CliError, CliResult};
use async_trait::async_trait;

/// Lists the controllers defined in the configuration file
#[derive(Debug, Default, Clone, Copy)]
pub struct ListControllers;

#[async_trait]
impl Command for ListControllers {
    fn name(&self) -> &'static str {
        "list-controllers"
    }

    fn usage(&self) -> &'static str {
        ""
    }

    fn description(&self) -> &'static str {
        "Lists the controllers in the configuration file"
    }

    fn requires_config(&self) -> bool {
        true
    }

    fn help(&self) -> String {
        format!(
            "Usage: {tool} [options] {name}\n\
             \n\
             \x20{description}. Controllers without an address are\n\
             \x20reached through the broadcast address.\n\
             \n\
             {options}\
             \n\
             \x20 Examples:\n\
             \n\
             \x20   {tool} {name}\n\
             \x20   {tool} --config uhppote.toml {name}\n",
            tool = TOOL,
            name = self.name(),
            description = self.description(),
            options = options_help(),
        )
    }

    async fn execute(&self, ctx: &Context, _args: &Arguments) -> CliResult<Outcome> {
        let config = ctx.config().ok_or_else(|| CliError::ConfigurationRequired {
            command: self.name().to_string(),
        })?;

        if config.controllers.is_empty() {
            return Ok(Outcome::Print("No controllers configured".to_string()));
        }

        let lines: Vec<String> = config
            .controllers
            .iter()
            .map(|controller| {
                let address = controller
                    .address
                    .clone()
                    .unwrap_or_else(|| format!("{} (broadcast)", config.broadcast_address));
                let doors: Vec<&str> = controller
                    .doors
                    .iter()
                    .map(String::as_str)
                    .filter(|door| !door.is_empty())
                    .collect();

                if doors.is_empty() {
                    format!("{:<10}  {}", controller.serial_number, address)
                } else {
                    format!("{:<10}  {}  {}", controller.serial_number, address, doors.join(", "))
                }
            })
            .collect();

        Ok(Outcome::Print(lines.join("\n")))
    }
}
