//! Service metadata handler.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceMeta {
    name: &'static str,
    version: &'static str,
    status: &'static str,
    endpoints: [&'static str; 3],
}

/// GET /
pub async fn index() -> Json<ServiceMeta> {
    Json(ServiceMeta {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        endpoints: ["GET /", "GET /verify-config", "POST /send-whatsapp/"],
    })
}
