// Domain module - Configuration, controller model and errors
pub mod config;
pub mod device;
pub mod error;
