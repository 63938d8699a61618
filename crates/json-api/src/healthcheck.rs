//! Healthcheck and service info handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Service info response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoResponse {
    /// Service name
    pub message: String,

    /// Server version
    pub version: String,

    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Service info handler
#[endpoint(tags("health"), summary = "Service information")]
pub(crate) async fn info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Dress Inventory Management API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}
