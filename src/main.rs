// Entry point for the membership HTTP server

use std::sync::Arc;

use anyhow::{Context, Result};
use membership_billing::adapters::{build_app, InMemoryMembershipStore, MembershipAppState};
use membership_billing::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config);
    tracing::info!(environment = ?config.server.environment, "Starting membership server");

    let default_user = config
        .store
        .default_user()
        .context("Invalid default user")?;
    let store = if config.store.seed {
        InMemoryMembershipStore::seeded(default_user).context("Failed to load seed data")?
    } else {
        InMemoryMembershipStore::new()
    };
    let store = Arc::new(store);

    let state = MembershipAppState {
        membership_repository: store.clone(),
        membership_reader: store,
        default_user,
    };
    let app = build_app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
