pub mod booking_store;
pub mod catalog;
pub mod invoice;
pub mod mailer;
pub mod registration;
pub mod storage;
