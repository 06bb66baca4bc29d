use axum::extract::Path;
use axum::Json;

use crate::errors::AppError;
use crate::models::CareService;
use crate::services::catalog;

// GET /api/services
pub async fn list_services() -> Json<&'static [CareService]> {
    Json(catalog::all())
}

// GET /api/services/:service_id
pub async fn get_service(
    Path(service_id): Path<String>,
) -> Result<Json<&'static CareService>, AppError> {
    catalog::find(&service_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("service {service_id}")))
}
