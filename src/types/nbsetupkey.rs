// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "netbird.io", version = "v1", kind = "NBSetupKey")]
#[kube(namespaced)]
#[kube(status = "NBSetupKeyStatus")]
#[serde(rename_all = "camelCase")]
pub struct NBSetupKeySpec {
    /// Secret in the same namespace holding the setup key
    #[serde(default)]
    pub secret_key_ref: SecretKeyRef,
}

/// Reference to a single data key of a Secret in the resource's namespace
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct SecretKeyRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
}

impl NBSetupKey {
    /// Secret name and data key, if both are set
    pub fn secret_ref(&self) -> Option<(&str, &str)> {
        let r = &self.spec.secret_key_ref;
        if r.name.is_empty() || r.key.is_empty() {
            None
        } else {
            Some((r.name.as_str(), r.key.as_str()))
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NBSetupKeyStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<NBCondition>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NBCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_probe_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
