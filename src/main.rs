// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eco-Tracker API Server
//!
//! Logs resource-consumption activities and reports their estimated
//! CO2e footprint by category.

use anyhow::Context;
use eco_tracker::{
    config::{Config, StoreBackend},
    db::{ActivityStore, FirestoreDb, MemoryStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        backend = ?config.store_backend,
        electricity_factor = config.default_electricity_factor,
        "Starting Eco-Tracker API"
    );

    let store: Arc<dyn ActivityStore> = match config.store_backend {
        StoreBackend::Firestore => Arc::new(
            FirestoreDb::new(&config.gcp_project_id)
                .await
                .context("Failed to connect to Firestore")?,
        ),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; activities are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Build shared state
    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config, store));

    // Build router
    let app = eco_tracker::routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eco_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
