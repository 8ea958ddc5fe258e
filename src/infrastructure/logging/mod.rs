// Logging module - Logging infrastructure
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::io;

/// Default filter directive for the given diagnostics setting
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "uhppote_cli=debug,warn"
    } else {
        "uhppote_cli=warn"
    }
}

/// Initialize logging system. `RUST_LOG` takes precedence over `--debug`.
pub fn init_logging(debug: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(debug)
                .with_level(true)
                .with_file(false)
                .with_line_number(false)
        )
        .try_init()?;

    tracing::debug!("uhppote-cli logging initialized");
    Ok(())
}
