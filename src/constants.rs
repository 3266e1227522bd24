// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys read by the webhook
pub mod annotations {
    /// Set on pods consuming a setup key; the value is the NBSetupKey name
    pub const SETUP_KEY: &str = "netbird.io/setup-key";
}

/// Webhook server defaults
pub mod webhook {
    /// Path the ValidatingWebhookConfiguration points at
    pub const VALIDATE_PATH: &str = "/validate-netbird-io-v1-nbsetupkey";
    pub const HEALTH_PATH: &str = "/healthz";
    pub const DEFAULT_PORT: u16 = 9443;
    pub const DEFAULT_CERT_PATH: &str = "/tmp/k8s-webhook-server/serving-certs/tls.crt";
    pub const DEFAULT_KEY_PATH: &str = "/tmp/k8s-webhook-server/serving-certs/tls.key";
}
