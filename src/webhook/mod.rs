// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Validating admission webhook for NBSetupKey resources.

pub mod server;
pub mod validator;

pub use server::{
    admit, create_webhook_router, load_tls_config, run_webhook_server, WebhookState,
};
pub use validator::{is_valid_setup_key, SetupKeyValidator, Warnings};
