// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Admission checks for NBSetupKey resources.
//!
//! A missing secret reference is the only hard failure on create/update.
//! Problems with the referenced secret itself are reported as warnings so
//! the key can be created before its secret.

use crate::error::{Error, Result};
use crate::kubernetes::{get_secret, pods_using_setup_key, secret_value};
use crate::types::NBSetupKey;
use kube::{Client, ResourceExt};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Non-blocking messages returned to the API client
pub type Warnings = Vec<String>;

#[derive(Clone)]
pub struct SetupKeyValidator {
    client: Client,
}

impl SetupKeyValidator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[instrument(skip(self, nbkey), fields(nbsetupkey = %key_path(nbkey)))]
    pub async fn validate_create(&self, nbkey: &NBSetupKey) -> Result<Warnings> {
        self.validate_secret_ref(nbkey).await
    }

    #[instrument(skip(self, _old, new), fields(nbsetupkey = %key_path(new)))]
    pub async fn validate_update(&self, _old: &NBSetupKey, new: &NBSetupKey) -> Result<Warnings> {
        self.validate_secret_ref(new).await
    }

    /// Deny deletion while any pod in the namespace still uses the key
    #[instrument(skip(self, nbkey), fields(nbsetupkey = %key_path(nbkey)))]
    pub async fn validate_delete(&self, nbkey: &NBSetupKey) -> Result<Warnings> {
        let name = nbkey.name_any();
        let namespace = namespace_of(nbkey);

        let pods = pods_using_setup_key(&self.client, &namespace, &name).await?;
        if !pods.is_empty() {
            warn!("NBSetupKey {}/{} still used by {} pods", namespace, name, pods.len());
            return Err(Error::SetupKeyInUse { name, pods });
        }

        Ok(Warnings::new())
    }

    async fn validate_secret_ref(&self, nbkey: &NBSetupKey) -> Result<Warnings> {
        let Some((secret_name, key)) = nbkey.secret_ref() else {
            return Err(Error::MissingSecretRef);
        };
        let namespace = namespace_of(nbkey);

        let Some(secret) = get_secret(&self.client, &namespace, secret_name).await? else {
            return Ok(vec![format!(
                "secret {}/{} not found",
                namespace, secret_name
            )]);
        };

        let Some(value) = secret_value(&secret, key) else {
            return Ok(vec![format!(
                "key {} not found in secret {}/{}",
                key, namespace, secret_name
            )]);
        };

        if !is_valid_setup_key(value) {
            return Ok(vec![format!(
                "setup key in secret {}/{} key {} is not a valid UUID",
                namespace, secret_name, key
            )]);
        }

        info!("Setup key reference {}/{}[{}] is valid", namespace, secret_name, key);
        Ok(Warnings::new())
    }
}

/// Check that a raw setup key parses as a UUID
pub fn is_valid_setup_key(raw: &[u8]) -> bool {
    std::str::from_utf8(raw).is_ok_and(|s| Uuid::parse_str(s).is_ok())
}

fn namespace_of(nbkey: &NBSetupKey) -> String {
    nbkey.namespace().unwrap_or_else(|| "default".to_string())
}

fn key_path(nbkey: &NBSetupKey) -> String {
    format!("{}/{}", namespace_of(nbkey), nbkey.name_any())
}
