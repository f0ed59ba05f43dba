//! Per-context cache of reusable backend clients
//!
//! TLS handshakes against the backend are expensive, so each execution
//! context keeps a small fixed-size cache of clients keyed by endpoint.
//! Eviction is FIFO by insertion order: the write cursor ignores access
//! recency, so a hot endpoint can be evicted purely by insertion pressure.
//! This is an accepted limitation of the design, not a bug.
//!
//! Peer certificate verification is disabled on every cached client; the
//! backend endpoints these callouts target do not present publicly
//! verifiable certificates.

use reqwest::Client;
use tracing::trace;

use crate::constants::http::CONNECTION_CACHE_SIZE;

/// A remote service address. Equality is exact string/port match; no case
/// folding or default-port normalization is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
        }
    }
}

/// Fixed-capacity client cache owned by a single execution context.
///
/// The cache is confined by ownership: `acquire` takes `&mut self`, so there
/// is no cross-context sharing and no locking. Callers borrow the returned
/// client for one request and must not retain it past the call.
pub struct ConnectionCache {
    entries: Vec<(Endpoint, Client)>,
    cursor: usize,
}

impl ConnectionCache {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(CONNECTION_CACHE_SIZE),
            cursor: 0,
        }
    }

    /// Return the cached client for (host, port), creating one if absent.
    ///
    /// The scan runs in insertion order from index 0; the first match wins
    /// and is returned as-is with whatever configuration it already carries.
    /// On a miss the slot at the write cursor is overwritten unconditionally
    /// and the cursor advances by one, wrapping at capacity.
    pub fn acquire(&mut self, host: &str, port: u16) -> &Client {
        if let Some(index) = self
            .entries
            .iter()
            .position(|(endpoint, _)| endpoint.host == host && endpoint.port == port)
        {
            trace!("Reusing cached client for {}:{}", host, port);
            return &self.entries[index].1;
        }

        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .expect("Failed to create HTTP client");

        let slot = self.cursor;
        self.cursor = (self.cursor + 1) % CONNECTION_CACHE_SIZE;

        if slot < self.entries.len() {
            self.entries[slot] = (Endpoint::new(host, port), client);
        } else {
            self.entries.push((Endpoint::new(host, port), client));
        }

        trace!("Opened new client for {}:{}", host, port);
        &self.entries[slot].1
    }
}

impl Default for ConnectionCache {
    fn default() -> Self {
        Self::new()
    }
}
