use axum::Json;

use crate::errors::AppError;
use crate::models::Registration;
use crate::services::registration;

// POST /api/register
pub async fn register(Json(form): Json<Registration>) -> Result<Json<serde_json::Value>, AppError> {
    registration::validate(&form).map_err(AppError::BadRequest)?;

    tracing::info!(email = %form.email, name = %form.name, "user registered");
    Ok(Json(serde_json::json!({"ok": true})))
}
