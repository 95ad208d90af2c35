// ABOUTME: Server binary for the MCP consent flow
// ABOUTME: Loads configuration, initializes logging, and serves the consent routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Consent Server Binary
//!
//! Serves the browser-facing consent screens for a remote MCP authorization
//! flow. The OAuth machinery itself (token issuance, session validation,
//! client registration) lives in external collaborators; this process only
//! renders screens and relays the owner's decision.

use anyhow::Result;
use clap::Parser;
use mcp_consent_server::{
    config::ServerConfig,
    logging,
    routes::{ConsentRoutes, HealthRoutes},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser)]
#[command(name = "consent-server")]
#[command(about = "Browser-facing consent screens for MCP remote authorization")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting consent server");
    info!("{}", config.summary());

    let config = Arc::new(config);
    let app = ConsentRoutes::routes(Arc::clone(&config))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Consent server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot install, run until killed
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
