// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod lookups for setup key consumers

use crate::constants::annotations;
use crate::error::Result;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// Names of pods in `namespace` annotated as consumers of the setup key `name`
#[instrument(skip(client))]
pub async fn pods_using_setup_key(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<Vec<String>> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod_list = pods.list(&ListParams::default()).await?;

    let consumers: Vec<String> = pod_list
        .items
        .iter()
        .filter(|p| uses_setup_key(p, name))
        .map(|p| p.name_any())
        .collect();

    debug!(
        "Found {} pods in {} using setup key {}",
        consumers.len(),
        namespace,
        name
    );
    Ok(consumers)
}

/// Check if a pod carries the setup key annotation pointing at `name`
pub fn uses_setup_key(pod: &Pod, name: &str) -> bool {
    pod.annotations()
        .get(annotations::SETUP_KEY)
        .is_some_and(|v| v == name)
}
