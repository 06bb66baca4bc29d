use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::SessionUser;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, Invoice, Location, NewBooking};
use crate::services::{catalog, invoice};
use crate::state::AppState;

const SAVE_WARNING: &str = "Warning: Booking may not be saved locally";

// POST /api/booking/:service_id
#[derive(Deserialize)]
pub struct BookingRequest {
    pub duration: f64,
    #[serde(default)]
    pub location: Location,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    message: &'static str,
    booking: Option<Booking>,
    warning: Option<&'static str>,
    invoice_sent: bool,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    user: SessionUser,
    Path(service_id): Path<String>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let service = catalog::find(&service_id)
        .ok_or_else(|| AppError::NotFound(format!("service {service_id}")))?;

    if body.duration < 1.0 {
        return Err(AppError::BadRequest(
            "duration must be at least 1 hour".to_string(),
        ));
    }

    let total_cost = catalog::total_cost(service, body.duration);
    let request = NewBooking {
        service_id: service.id.to_string(),
        service_name: service.name.to_string(),
        duration: body.duration,
        location: body.location.clone(),
        total_cost,
        status: BookingStatus::Pending,
    };

    let booking = state.bookings.save(&user.email, request);
    if booking.is_none() {
        tracing::warn!(email = %user.email, service = service.id, "booking was not persisted");
    }

    let bill = Invoice {
        user_email: user.email.clone(),
        service_name: service.name.to_string(),
        total_cost,
        duration: body.duration,
        location: body.location,
    };
    let invoice_sent = match invoice::send_invoice(
        state.mailer.as_ref(),
        &state.config.mail_from,
        &bill,
    )
    .await
    {
        Ok(()) => {
            tracing::info!(to = %user.email, "invoice email sent");
            true
        }
        Err(e) => {
            tracing::error!(to = %user.email, error = %e, "failed to send invoice email");
            false
        }
    };

    Ok(Json(BookingConfirmation {
        message: "Booking Confirmed!",
        warning: booking.is_none().then_some(SAVE_WARNING),
        booking,
        invoice_sent,
    }))
}

// GET /api/my-bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    user: SessionUser,
) -> Json<Vec<Booking>> {
    Json(state.bookings.load(&user.email))
}

// GET /api/my-bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    user: SessionUser,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    state
        .bookings
        .find(&user.email, id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

// POST /api/my-bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    user: SessionUser,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    state
        .bookings
        .update_status(&user.email, id, BookingStatus::Cancelled)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}
