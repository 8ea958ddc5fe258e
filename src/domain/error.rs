use crate::exitcode;
use std::net::SocketAddr;
use thiserror::Error;

/// Communication failures raised by a device client
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    #[error("No reply from controller {serial_number} within {timeout_ms}ms")]
    Timeout { serial_number: u32, timeout_ms: u64 },

    #[error("Invalid reply from {from}: {message}")]
    InvalidReply { from: SocketAddr, message: String },

    #[error("Reply from controller {actual} does not match request for {expected}")]
    SerialNumberMismatch { expected: u32, actual: u32 },

    #[error("Invalid controller address '{0}'")]
    InvalidAddress(String),
}

pub type DeviceResult<T> = Result<T, DeviceError>;

/// Top level error type. These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    MissingArgument(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Missing command")]
    MissingCommand,

    #[error("Invalid command: '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' requires a configuration file")]
    ConfigurationRequired { command: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("{0}")]
    DeviceRefused(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Exit code reported to the shell for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingArgument(_)
            | CliError::InvalidArgument(_)
            | CliError::MissingCommand
            | CliError::UnknownCommand(_) => exitcode::USAGE,
            CliError::ConfigurationRequired { .. } | CliError::Config { .. } => exitcode::CONFIG,
            CliError::Device(_) => exitcode::UNAVAILABLE,
            CliError::DeviceRefused(_) => exitcode::SOFTWARE,
            CliError::Output(_) => exitcode::IOERR,
        }
    }

    /// True for errors where the command listing helps the user recover
    pub fn wants_listing(&self) -> bool {
        matches!(self, CliError::MissingCommand | CliError::UnknownCommand(_))
    }
}
