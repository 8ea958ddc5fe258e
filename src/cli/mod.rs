// CLI module - Command line interface
pub mod app;
pub mod args;
pub mod arguments;
pub mod command;
pub mod commands;
pub mod context;
pub mod output;
pub mod registry;

pub use app::execute_command;
pub use args::Args;
pub use arguments::Arguments;
pub use command::{Command, Outcome};
pub use context::Context;
pub use output::{ConsoleWriter, OutputWriter};
pub use registry::{Registry, Resolution};
