use crate::domain::config::{default_timeout_ms, Config};
use crate::domain::device::DeviceClient;
use std::sync::Arc;
use std::time::Duration;

/// Everything a command needs to run, built once per invocation
#[derive(Clone)]
pub struct Context {
    client: Arc<dyn DeviceClient>,
    config: Option<Config>,
    debug: bool,
    timeout: Duration,
}

impl Context {
    pub fn new(client: Arc<dyn DeviceClient>, config: Option<Config>) -> Self {
        Self {
            client,
            config,
            debug: false,
            timeout: Duration::from_millis(default_timeout_ms()),
        }
    }

    /// Enable diagnostic output
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Effective request timeout for this invocation
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn client(&self) -> &dyn DeviceClient {
        self.client.as_ref()
    }

    /// Resolved configuration, `None` when no configuration file was found
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
