// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::webhook::{DEFAULT_CERT_PATH, DEFAULT_KEY_PATH, DEFAULT_PORT};
use anyhow::{Context, Result};
use std::env;

/// Webhook configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// PEM certificate served to the API server
    pub cert_path: String,
    pub key_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any variable source, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("WEBHOOK_PORT") {
            Some(v) => v
                .parse()
                .with_context(|| format!("WEBHOOK_PORT is not a valid port: {}", v))?,
            None => DEFAULT_PORT,
        };
        let cert_path = lookup("WEBHOOK_CERT_PATH").unwrap_or(DEFAULT_CERT_PATH.to_string());
        let key_path = lookup("WEBHOOK_KEY_PATH").unwrap_or(DEFAULT_KEY_PATH.to_string());

        Ok(Config {
            port,
            cert_path,
            key_path,
        })
    }
}
