pub mod bookings;
pub mod catalog;
pub mod health;
pub mod invoice;
pub mod register;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/services", get(catalog::list_services))
        .route("/api/services/:service_id", get(catalog::get_service))
        .route("/api/booking/:service_id", post(bookings::create_booking))
        .route("/api/my-bookings", get(bookings::list_bookings))
        .route("/api/my-bookings/:id", get(bookings::get_booking))
        .route("/api/my-bookings/:id/cancel", post(bookings::cancel_booking))
        .route("/api/send-invoice", post(invoice::send_invoice))
        .route("/api/register", post(register::register))
        .with_state(state)
}
