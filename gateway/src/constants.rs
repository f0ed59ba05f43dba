//! Application-wide constants for timeouts, limits, and default addresses

use std::time::Duration;

/// Outbound HTTP client constants
pub mod http {
    use super::Duration;

    /// Number of cached client connections per execution context
    pub const CONNECTION_CACHE_SIZE: usize = 10;

    /// Read timeout applied to POST callouts
    pub const POST_READ_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Diagnostics server constants
pub mod diagnostics {
    /// Registry key under which the diagnostics server publishes its status
    pub const SUBSYSTEM_NAME: &str = "HTTPServer";

    /// Default bind host for the diagnostics HTTP server
    pub const DEFAULT_HOST: &str = "0.0.0.0";

    /// Default port for the diagnostics HTTP server
    pub const DEFAULT_PORT: u16 = 8095;
}
