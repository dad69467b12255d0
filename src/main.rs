// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use noteful_api::{api::router, config::Config, state::AppState, storage, telemetry};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Failed to load configuration");
    telemetry::init(config.log_format);

    let db = storage::connect(&config.database_url)
        .await
        .expect("Failed to open database");

    let state = AppState::new(db.clone(), &config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!(
        addr = %config.bind_addr,
        environment = ?config.environment,
        "Noteful API listening (docs at /docs)"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");

    db.close().await;
    tracing::info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
