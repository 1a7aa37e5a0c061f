//! Snapshots of the times already reserved for a professional on one date.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::time::TimeOfDay;

/// Lifecycle status of a stored appointment.
///
/// Serialized with the labels the appointment store uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "Confirmado")]
    Confirmed,
    #[serde(rename = "Completado")]
    Completed,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl AppointmentStatus {
    /// Only confirmed appointments hold their slot; cancelling frees it.
    pub fn holds_slot(self) -> bool {
        matches!(self, AppointmentStatus::Confirmed)
    }
}

/// The subset of a stored appointment needed to know which slot it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(rename = "doctorId")]
    pub professional_id: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub status: AppointmentStatus,
}

/// Set of start times already taken on a single date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookedTimes(BTreeSet<TimeOfDay>);

impl BookedTimes {
    pub fn new() -> Self {
        BookedTimes(BTreeSet::new())
    }

    /// Build from raw `HH:MM` strings.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimeFormat` on the first malformed entry.
    pub fn from_times<I, S>(times: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        times
            .into_iter()
            .map(|t| TimeOfDay::parse(t.as_ref()))
            .collect::<Result<BTreeSet<_>>>()
            .map(BookedTimes)
    }

    /// Times held by active appointments of `professional_id` on `date`.
    ///
    /// Equivalent to querying the appointment store for confirmed bookings
    /// matching both the professional and the date. When `professional_id` is
    /// `None` the records are assumed to already belong to one professional.
    pub fn for_professional_on(
        records: &[AppointmentRecord],
        professional_id: Option<&str>,
        date: NaiveDate,
    ) -> Self {
        records
            .iter()
            .filter(|r| r.date == date && r.status.holds_slot())
            .filter(|r| professional_id.is_none_or(|id| r.professional_id == id))
            .map(|r| r.time)
            .collect()
    }

    pub fn insert(&mut self, time: TimeOfDay) -> bool {
        self.0.insert(time)
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.0.contains(&time)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TimeOfDay> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TimeOfDay> for BookedTimes {
    fn from_iter<I: IntoIterator<Item = TimeOfDay>>(iter: I) -> Self {
        BookedTimes(iter.into_iter().collect())
    }
}
