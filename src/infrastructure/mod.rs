// Infrastructure module - External dependencies and adapters
pub mod udp;
pub mod logging;
pub mod config;
