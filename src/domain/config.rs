use serde::{Deserialize, Serialize};

/// uhppote-cli configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Local address the UDP socket binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Address requests are sent to for controllers without a fixed address
    #[serde(default = "default_broadcast_address")]
    pub broadcast_address: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Known controllers
    #[serde(default)]
    pub controllers: Vec<ControllerConfig>,
}

/// Controller configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerConfig {
    /// Controller serial number
    pub serial_number: u32,
    /// Controller IPv4 address and port. Broadcast is used when absent.
    #[serde(default)]
    pub address: Option<String>,
    /// Door names, in door order
    #[serde(default)]
    pub doors: Vec<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0:0".to_string()
}

fn default_broadcast_address() -> String {
    "255.255.255.255:60000".to_string()
}

pub fn default_timeout_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            broadcast_address: default_broadcast_address(),
            timeout_ms: default_timeout_ms(),
            controllers: Vec::new(),
        }
    }
}

impl Config {
    /// Find the configuration for a controller
    pub fn controller(&self, serial_number: u32) -> Option<&ControllerConfig> {
        self.controllers
            .iter()
            .find(|c| c.serial_number == serial_number)
    }
}
