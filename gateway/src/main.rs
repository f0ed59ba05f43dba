use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use gateway::config::Config;
use gateway::constants::diagnostics::SUBSYSTEM_NAME;
use gateway::registry::{SubsystemRegistry, SubsystemStatus};
use gateway::web::DiagnosticsServer;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("gateway=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Backend Callout Gateway");

    let config = Config::load_or_default("config.toml")?;
    let registry = SubsystemRegistry::new();

    let mut server = None;
    if config.http_server.enabled {
        let bind_addr = config.http_server.bind_address();
        match DiagnosticsServer::start(registry.clone(), &bind_addr).await {
            Ok(instance) => server = Some(instance),
            Err(e) => {
                // Status is intentionally left at Starting on this path.
                error!(
                    "Failed to start the diagnostics http server. Please ensure the [http_server] \
                     section of config.toml is configured properly, or turn it off if you don't \
                     need it. Error: {}",
                    e
                );
            }
        }
    } else {
        info!("Diagnostics http server disabled in config");
    }

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    if let Some(server) = server {
        registry
            .set(SUBSYSTEM_NAME, SubsystemStatus::ShuttingDown)
            .await;
        server.stop().await;
        registry.set(SUBSYSTEM_NAME, SubsystemStatus::Shutdown).await;
    }

    Ok(())
}
