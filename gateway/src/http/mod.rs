pub mod cache;
pub mod dispatcher;
pub mod status;

pub use cache::{ConnectionCache, Endpoint};
pub use dispatcher::{HttpDispatcher, HttpResponse, Scheme};
pub use status::reason_phrase;
