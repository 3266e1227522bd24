// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("spec.secretKeyRef must name both a secret and a key")]
    MissingSecretRef,

    #[error("NBSetupKey {name} is in use by pods: {}", pods.join(", "))]
    SetupKeyInUse { name: String, pods: Vec<String> },

    #[error("TLS configuration error: {0}")]
    TlsConfig(String),

    #[error("Webhook server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, Error>;
