//! uhppote-cli Library
//!
//! Command dispatch framework for managing UHPPOTE access control
//! controllers from the command line.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;

pub use cli::{Arguments, Command, Context, Outcome, Registry};
pub use domain::config::Config;
pub use domain::device::{DeviceClient, Event, Status};
pub use domain::error::{CliError, CliResult, DeviceError, DeviceResult};
