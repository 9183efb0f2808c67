use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::services::ActivityService;

pub async fn health_handler(
    State(service): State<ActivityService>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match service.health().await {
        Ok(()) => Ok(Json(serde_json::json!({ "status": "ok" }))),
        Err(e) => {
            tracing::warn!(error = %e, "store health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "detail": "Store unavailable" })),
            ))
        }
    }
}
