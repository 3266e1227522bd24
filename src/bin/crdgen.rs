// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prints the NBSetupKey CustomResourceDefinition as YAML.

use kube::CustomResourceExt;
use nbsetupkey_webhook::types::NBSetupKey;

fn main() -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(&NBSetupKey::crd())?);
    Ok(())
}
