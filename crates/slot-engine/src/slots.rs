//! Slot generation -- expands a half-open `[start, end)` range into the start
//! times of consecutive fixed-length consultations.

use crate::duration::AppointmentDuration;
use crate::error::Result;
use crate::time::TimeOfDay;

/// Iterator over slot start times inside one range.
///
/// Yields `start`, `start + d`, `start + 2d`, ... while the value is strictly
/// before `end`. A slot starting exactly at `end` is never produced.
#[derive(Debug, Clone)]
pub struct Slots {
    next: Option<TimeOfDay>,
    end: TimeOfDay,
    step: u32,
}

impl Slots {
    pub fn new(start: TimeOfDay, end: TimeOfDay, duration: AppointmentDuration) -> Self {
        Slots {
            next: Some(start),
            end,
            step: duration.minutes(),
        }
    }
}

impl Iterator for Slots {
    type Item = TimeOfDay;

    fn next(&mut self) -> Option<TimeOfDay> {
        let current = self.next.filter(|t| *t < self.end)?;
        self.next = current.checked_add_minutes(self.step);
        Some(current)
    }
}

/// Generate slot start times between two `HH:MM` strings.
///
/// # Arguments
/// - `start` -- first slot start (e.g., "09:00")
/// - `end` -- exclusive upper bound (e.g., "11:00")
/// - `duration_minutes` -- spacing between consecutive slots
///
/// Returns an empty list when `start >= end`.
///
/// # Errors
/// Returns `SlotError::InvalidTimeFormat` if either bound is not strict `HH:MM`.
/// Returns `SlotError::InvalidDuration` if `duration_minutes <= 0`.
pub fn generate_time_slots(start: &str, end: &str, duration_minutes: i64) -> Result<Vec<TimeOfDay>> {
    let duration = AppointmentDuration::new(duration_minutes)?;
    let start = TimeOfDay::parse(start)?;
    let end = TimeOfDay::parse(end)?;
    Ok(Slots::new(start, end, duration).collect())
}
