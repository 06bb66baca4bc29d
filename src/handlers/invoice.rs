use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::Invoice;
use crate::services::invoice;
use crate::state::AppState;

// POST /api/send-invoice
pub async fn send_invoice(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Invoice>,
) -> Result<Json<serde_json::Value>, AppError> {
    invoice::send_invoice(state.mailer.as_ref(), &state.config.mail_from, &body)
        .await
        .map_err(|e| {
            tracing::error!(to = %body.user_email, error = %e, "failed to send invoice");
            AppError::Mail
        })?;

    tracing::info!(to = %body.user_email, service = %body.service_name, "invoice sent");
    Ok(Json(serde_json::json!({"message": "Invoice sent successfully"})))
}
