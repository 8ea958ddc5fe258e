use crate::cli::arguments::Arguments;
use crate::cli::command::{options_help, Command, Outcome, TOOL};
use crate::cli::context::Context;
use crate::domain::error::CliResult;
use async_trait::async_trait;
use tracing::debug;

/// Retrieves the status of a single controller
#[derive(Debug, Default, Clone, Copy)]
pub struct GetStatus;

#[async_trait]
impl Command for GetStatus {
    fn name(&self) -> &'static str {
        "get-status"
    }

    fn usage(&self) -> &'static str {
        "<serial number>"
    }

    fn description(&self) -> &'static str {
        "Retrieves the controller status"
    }

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
             \n\
             {options}\
             \n\
             \x20 Examples:\n\
             \n\
             \x20   {tool} {name} 12345678\n",
            tool = TOOL,
            name = self.name(),
            usage = self.usage(),
            description = self.description(),
            options = options_help(),
        )
    }

    async fn execute(&self, ctx: &Context, args: &Arguments) -> CliResult<Outcome> {
        let serial_number = args.uint32(0, "Missing serial number", "Invalid serial number")?;

        debug!("get-status {}", serial_number);
        let status = ctx.client().get_status(serial_number).await?;

        Ok(Outcome::Print(status.to_string()))
    }
}
