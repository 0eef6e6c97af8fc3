use crate::models::BookingSlot;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

const ARRIVAL_NOTE: &str = "Please arrive 10 minutes before your scheduled interview.";

/// Errors that can occur when reserving a slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Slot not available")]
    SlotUnavailable { date: String, time: String },
}

/// Confirmed reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "reservationId")]
    pub reservation_id: String,
    pub status: String,
    pub date: String,
    pub time: String,
    pub message: String,
    #[serde(rename = "confirmedAt")]
    pub confirmed_at: chrono::DateTime<chrono::Utc>,
}

/// Fixed-capacity in-memory interview slot registry
///
/// Reservation is a check-and-flip under one lock, so two concurrent
/// requests for the same slot cannot both succeed.
#[derive(Debug)]
pub struct SlotRegistry {
    slots: Mutex<Vec<BookingSlot>>,
}

impl SlotRegistry {
    pub fn new(slots: Vec<BookingSlot>) -> Self {
        Self {
            slots: Mutex::new(slots),
        }
    }

    /// Slots still open for booking
    pub fn available_slots(&self) -> Vec<BookingSlot> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.iter().filter(|slot| slot.available).cloned().collect()
    }

    /// Reserve the slot at `date`/`time`
    pub fn reserve(&self, date: &str, time: &str) -> Result<Reservation, BookingError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);

        let slot = slots
            .iter_mut()
            .find(|slot| slot.available && slot.date == date && slot.time == time)
            .ok_or_else(|| BookingError::SlotUnavailable {
                date: date.to_string(),
                time: time.to_string(),
            })?;

        slot.available = false;
        drop(slots);

        tracing::info!("Reserved interview slot {} {}", date, time);

        Ok(Reservation {
            reservation_id: uuid::Uuid::new_v4().to_string(),
            status: "confirmed".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            message: ARRIVAL_NOTE.to_string(),
            confirmed_at: chrono::Utc::now(),
        })
    }

    /// Total number of slots, booked or not
    pub fn capacity(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
