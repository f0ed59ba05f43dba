pub mod config;
pub mod constants;
pub mod errors;
pub mod http;
pub mod registry;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use errors::HttpError;
pub use http::{ConnectionCache, HttpDispatcher, HttpResponse};
pub use registry::{SubsystemRegistry, SubsystemStatus};
pub use web::DiagnosticsServer;
