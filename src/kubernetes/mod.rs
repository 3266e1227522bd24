// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes lookups for secrets and the pods that consume setup keys.

pub mod pods;
pub mod secrets;

pub use pods::{pods_using_setup_key, uses_setup_key};
pub use secrets::{get_secret, secret_value};
