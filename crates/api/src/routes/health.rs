//! Liveness probe.

use axum::Json;
use serde::Serialize;

/// Body of the liveness probe. The process answering is the whole check.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Liveness {
    pub status: &'static str,
}

impl Liveness {
    pub const OK: Liveness = Liveness { status: "ok" };
}

/// GET /health — always `{"status":"ok"}`.
pub async fn check() -> Json<Liveness> {
    Json(Liveness::OK)
}
