// uhppote-cli - Command line tool for UHPPOTE access control controllers
use anyhow::Context;
use clap::Parser;
use uhppote_cli::cli::{execute_command, Args, ConsoleWriter};
use uhppote_cli::infrastructure::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.debug).context("Failed to initialize logging")?;

    let mut writer = ConsoleWriter::stdio();
    let code = execute_command(args, &mut writer).await;

    std::process::exit(code);
}
