// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nbsetupkey_webhook::config::Config;
use nbsetupkey_webhook::webhook::run_webhook_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, honouring RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting NBSetupKey admission webhook");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: port={} cert={} key={}",
        config.port, config.cert_path, config.key_path
    );

    // Create Kubernetes client
    let client = Client::try_default()
        .await
        .context("Failed to create Kubernetes client")?;
    info!("Connected to Kubernetes cluster");

    // Serve admission requests until the server fails
    run_webhook_server(client, &config)
        .await
        .context("Webhook server stopped")?;

    Ok(())
}
