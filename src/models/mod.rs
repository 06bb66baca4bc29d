pub mod booking;
pub mod invoice;
pub mod registration;
pub mod service;

pub use booking::{Booking, BookingStatus, Location, NewBooking};
pub use invoice::{Invoice, MailMessage};
pub use registration::Registration;
pub use service::CareService;
