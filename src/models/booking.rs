use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub service_id: String,
    pub service_name: String,
    pub duration: f64,
    pub location: Location,
    pub total_cost: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// A booking as submitted by a caller, before the store assigns `id` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub service_id: String,
    pub service_name: String,
    pub duration: f64,
    #[serde(default)]
    pub location: Location,
    pub total_cost: f64,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn into_booking(self, id: i64, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            service_id: self.service_id,
            service_name: self.service_name,
            duration: self.duration,
            location: self.location,
            total_cost: self.total_cost,
            status: self.status,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Location {
    pub division: String,
    pub district: String,
    pub city: String,
    pub area: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}
