// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Admission webhook server.
//!
//! Serves the NBSetupKey validating webhook over TLS, using the certificate
//! and key paths from [`Config`].

use crate::config::Config;
use crate::constants::webhook::{HEALTH_PATH, VALIDATE_PATH};
use crate::error::{Error, Result};
use crate::types::NBSetupKey;
use crate::webhook::validator::{SetupKeyValidator, Warnings};
use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_server::tls_rustls::RustlsConfig;
use http::StatusCode;
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
use kube::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Shared state for webhook handlers
pub struct WebhookState {
    pub validator: SetupKeyValidator,
}

impl WebhookState {
    pub fn new(client: Client) -> Self {
        Self {
            validator: SetupKeyValidator::new(client),
        }
    }
}

/// Create the webhook router
pub fn create_webhook_router(state: Arc<WebhookState>) -> Router {
    Router::new()
        .route(VALIDATE_PATH, post(validate_nbsetupkey))
        .route(HEALTH_PATH, get(healthz))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// The body is decoded here rather than by `Json` so that malformed reviews
/// still get an AdmissionReview back
async fn validate_nbsetupkey(
    State(state): State<Arc<WebhookState>>,
    body: Bytes,
) -> impl IntoResponse {
    let request = match parse_review(&body) {
        Ok(req) => req,
        Err(message) => {
            error!(error = %message, "Failed to extract admission request");
            return (
                StatusCode::BAD_REQUEST,
                Json(
                    AdmissionResponse::invalid(format!("Invalid AdmissionReview: {}", message))
                        .into_review(),
                ),
            );
        }
    };

    let response = admit(&state.validator, &request).await;
    (StatusCode::OK, Json(response.into_review()))
}

fn parse_review(body: &[u8]) -> std::result::Result<AdmissionRequest<NBSetupKey>, String> {
    let review: AdmissionReview<NBSetupKey> =
        serde_json::from_slice(body).map_err(|e| e.to_string())?;
    TryInto::<AdmissionRequest<NBSetupKey>>::try_into(review).map_err(|e| e.to_string())
}

/// Run the validator for the request's operation and build the response
pub async fn admit(
    validator: &SetupKeyValidator,
    request: &AdmissionRequest<NBSetupKey>,
) -> AdmissionResponse {
    let uid = &request.uid;
    debug!(
        uid = %uid,
        operation = ?request.operation,
        namespace = ?request.namespace,
        name = %request.name,
        "Processing admission request"
    );

    let object = request.object.as_ref().map(|o| with_namespace(o, request));
    let old_object = request.old_object.as_ref().map(|o| with_namespace(o, request));

    let result: Result<Warnings> = match (&request.operation, &object, &old_object) {
        (Operation::Create, Some(obj), _) => validator.validate_create(obj).await,
        (Operation::Update, Some(obj), Some(old)) => validator.validate_update(old, obj).await,
        (Operation::Delete, _, Some(old)) => validator.validate_delete(old).await,
        (Operation::Connect, _, _) => Ok(Warnings::new()),
        (operation, _, _) => {
            error!(uid = %uid, operation = ?operation, "Missing object in request");
            return AdmissionResponse::from(request)
                .deny(format!("Missing object for {:?} request", operation));
        }
    };

    match result {
        Ok(warnings) => {
            let mut response = AdmissionResponse::from(request);
            if !warnings.is_empty() {
                warn!(uid = %uid, warnings = ?warnings, "Admission request allowed with warnings");
                response.warnings = Some(warnings);
            } else {
                info!(uid = %uid, "Admission request allowed");
            }
            response
        }
        Err(e) => {
            warn!(uid = %uid, error = %e, "Admission request denied");
            AdmissionResponse::from(request).deny(e.to_string())
        }
    }
}

/// Objects in admission requests may omit the namespace; take it from the request
fn with_namespace(obj: &NBSetupKey, request: &AdmissionRequest<NBSetupKey>) -> NBSetupKey {
    let mut obj = obj.clone();
    if obj.metadata.namespace.is_none() {
        obj.metadata.namespace = request.namespace.clone();
    }
    obj
}

/// kube and axum-server enable different rustls backends, so the process
/// provider has to be chosen explicitly
fn install_crypto_provider() {
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}

/// Load the serving certificate and key from the configured PEM files
pub async fn load_tls_config(config: &Config) -> Result<RustlsConfig> {
    install_crypto_provider();

    RustlsConfig::from_pem_file(&config.cert_path, &config.key_path)
        .await
        .map_err(|e| Error::TlsConfig(format!("{}: {}", config.cert_path, e)))
}

/// Run the webhook server with TLS until it fails
pub async fn run_webhook_server(client: Client, config: &Config) -> Result<()> {
    let state = Arc::new(WebhookState::new(client));
    let app = create_webhook_router(state);

    let tls = load_tls_config(config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(port = config.port, "Webhook server listening with TLS");

    axum_server::bind_rustls(addr, tls)
        .serve(app.into_make_service())
        .await
        .map_err(|e| Error::Server(e.to_string()))
}
