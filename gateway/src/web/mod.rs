pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::DiagnosticsServer;

use crate::registry::SubsystemRegistry;

/// State shared across diagnostics handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: SubsystemRegistry,
}
