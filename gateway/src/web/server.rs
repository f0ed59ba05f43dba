use anyhow::Result;
use axum::{middleware::from_fn, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::constants::diagnostics::SUBSYSTEM_NAME;
use crate::registry::{SubsystemRegistry, SubsystemStatus};
use crate::web::middleware::access_log;
use crate::web::{handlers, AppState};

/// Handle to the running diagnostics server.
///
/// Owns the serve task; dropping the handle leaves the task running for the
/// life of the process, `stop` shuts it down gracefully.
pub struct DiagnosticsServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl DiagnosticsServer {
    /// Bind the listener, register the routes, and start serving in a
    /// background task.
    ///
    /// Publishes `Starting` into the registry on entry and `Good` once the
    /// listener is up. On error no further transition is published; the
    /// caller decides how to record the failure.
    pub async fn start(registry: SubsystemRegistry, bind_addr: &str) -> Result<Self> {
        registry.set(SUBSYSTEM_NAME, SubsystemStatus::Starting).await;

        let listener = TcpListener::bind(bind_addr).await?;
        let addr = listener.local_addr()?;

        let app = create_router(AppState {
            registry: registry.clone(),
        });

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                error!("Diagnostics server terminated: {}", e);
            }
        });

        registry.set(SUBSYSTEM_NAME, SubsystemStatus::Good).await;
        info!("Diagnostics server running on http://{}", addr);

        Ok(Self {
            addr,
            shutdown: Some(shutdown_tx),
            handle,
        })
    }

    /// Address the listener is actually bound to (tests bind port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Gracefully stop the server and wait for the serve task to finish.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(e) = self.handle.await {
            error!("Diagnostics server task failed: {}", e);
        }
    }
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/kitty", get(handlers::kitty))
        .layer(from_fn(access_log))
        .with_state(state)
}
