use crate::cli::args::Args;
use crate::cli::command::Outcome;
use crate::cli::context::Context;
use crate::cli::output::OutputWriter;
use crate::cli::registry::{Registry, Resolution};
use crate::domain::config::Config;
use crate::domain::error::{CliResult, DeviceResult};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::udp::UdpDeviceClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Execute CLI command, returning the process exit code
pub async fn execute_command<W: OutputWriter>(args: Args, writer: &mut W) -> i32 {
    execute_with(args, &ConfigManager::new(), &Registry::default(), writer).await
}

/// Execute CLI command against an explicit configuration manager and registry
pub async fn execute_with<W: OutputWriter>(
    args: Args,
    config_manager: &ConfigManager,
    registry: &Registry,
    writer: &mut W,
) -> i32 {
    let result = execute(&args, config_manager, registry).await;
    registry.report(result, args.debug, writer)
}

/// Resolve the command first: built-ins, unknown commands and the
/// configuration gate never load a device client.
async fn execute(args: &Args, config_manager: &ConfigManager, registry: &Registry) -> CliResult<Outcome> {
    let (command, arguments) = match registry.resolve(&args.command)? {
        Resolution::Builtin(outcome) => return Ok(outcome),
        Resolution::Command(command, arguments) => (command, arguments),
    };

    let config = config_manager.resolve(args.config.as_deref())?;
    Registry::check_config(command, config.as_ref())?;

    let ctx = build_context(args, config)?;
    debug!("Executing '{}' with {} arguments", command.name(), arguments.len());
    command.execute(&ctx, &arguments).await
}

fn build_context(args: &Args, config: Option<Config>) -> DeviceResult<Context> {
    let timeout = effective_timeout(args, config.as_ref());
    let client = build_client(args, config.as_ref(), timeout)?;

    Ok(Context::new(Arc::new(client), config)
        .with_debug(args.debug)
        .with_timeout(timeout))
}

/// `--timeout` overrides the configuration file, which overrides the default
fn effective_timeout(args: &Args, config: Option<&Config>) -> Duration {
    let configured = config.cloned().unwrap_or_default().timeout_ms;
    Duration::from_millis(args.timeout.unwrap_or(configured))
}

/// Command line options override the configuration file, which overrides the defaults
fn build_client(args: &Args, config: Option<&Config>, timeout: Duration) -> DeviceResult<UdpDeviceClient> {
    let mut settings = config.cloned().unwrap_or_default();
    if let Some(bind) = &args.bind {
        settings.bind_address = bind.clone();
    }
    if let Some(broadcast) = &args.broadcast {
        settings.broadcast_address = broadcast.clone();
    }

    debug!(
        "Device client bind:{} broadcast:{} timeout:{:?}",
        settings.bind_address, settings.broadcast_address, timeout
    );
    UdpDeviceClient::from_config(&settings, timeout)
}
