//! Error types for slot-engine operations.

use thiserror::Error;

use crate::schedule::DayOfWeek;
use crate::time::TimeOfDay;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time format: {0:?} (expected zero-padded 24h HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Invalid appointment duration: {0}")]
    InvalidDuration(String),

    #[error("Appointment duration {0} min is outside the allowed 10-120 min")]
    DurationOutOfRange(u32),

    #[error("Invalid range on {day}: start {start} is not before end {end}")]
    InvalidRange {
        day: DayOfWeek,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Local time does not exist: {0}")]
    NonexistentLocalTime(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
