// Service exports
pub mod booking;
pub mod extraction;

pub use booking::{BookingError, Reservation, SlotRegistry};
pub use extraction::{DocumentKind, ExtractionError, TextExtractor};
