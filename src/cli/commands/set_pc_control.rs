use crate::cli::arguments::Arguments;
use crate::cli::command::{options_help, Command, Outcome, TOOL};
use crate::cli::context::Context;
use crate::domain::error::{CliError, CliResult};
use async_trait::async_trait;
use tracing::debug;

/// Enables or disables access control from a remote application
#[derive(Debug, Default, Clone, Copy)]
pub struct SetPcControl;

#[async_trait]
impl Command for SetPcControl {
    fn name(&self) -> &'static str {
        "set-pc-control"
    }

    fn usage(&self) -> &'static str {
        "<serial number> <enable>"
    }

    fn description(&self) -> &'static str {
        "Enables or disables remote access control"
    }

    // Configuration is useful but optional
    fn requires_config(&self) -> bool {
        false
    }

    fn help(&self) -> String {
        format!(
            "Usage: {tool} [options] {name} {usage}\n\
             \n\
             \x20{description}\n\
             \n\
             \x20 <serial number>  (required) controller serial number\n\
             \x20 <enable>         (optional) 'true' or 'false'. Defaults to 'true'\n\
             \n\
             {options}\
             \n\
             \x20 Examples:\n\
             \n\
             \x20   {tool} {name} 12345678\n\
             \x20   {tool} {name} 12345678 false\n\
             \x20   {tool} --debug --config .config {name} 12345678 true\n",
            tool = TOOL,
            name = self.name(),
            usage = self.usage(),
            description = self.description(),
            options = options_help(),
        )
    }

    async fn execute(&self, ctx: &Context, args: &Arguments) -> CliResult<Outcome> {
        let serial_number = args.uint32(0, "Missing serial number", "Invalid serial number")?;
        let enable = args.optional_boolean(
            1,
            true,
            "Invalid enable value - expected 'true' or 'false'",
        )?;

        debug!("set-pc-control {} {}", serial_number, enable);
        let succeeded = ctx.client().set_pc_control(serial_number, enable).await?;
        if !succeeded {
            let action = if enable { "enable" } else { "disable" };
            return Err(CliError::DeviceRefused(format!(
                "Failed to {} 'set pc control' for {}",
                action, serial_number
            )));
        }

        Ok(Outcome::Print(format!("{} {}", serial_number, enable)))
    }
}
