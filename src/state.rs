use crate::config::AppConfig;
use crate::services::booking_store::BookingStore;
use crate::services::mailer::Mailer;

pub struct AppState {
    pub bookings: BookingStore,
    pub config: AppConfig,
    pub mailer: Box<dyn Mailer>,
}
