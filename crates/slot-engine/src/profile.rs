//! Professional profile documents as stored by the application.
//!
//! The stored record keeps times as plain strings and the duration as a plain
//! number. [`ProfileDocument`] mirrors that shape; converting it into a
//! [`ProfessionalProfile`] is the point where every value is validated.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::availability;
use crate::booking::BookedTimes;
use crate::duration::AppointmentDuration;
use crate::error::{Result, SlotError};
use crate::schedule::{DayOfWeek, DaySchedule, TimeRange, WeeklySchedule};
use crate::time::TimeOfDay;

/// Raw `{start, end}` range of a stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDocument {
    pub start: String,
    pub end: String,
}

/// Raw per-day configuration of a stored profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDocument {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub slots: Vec<RangeDocument>,
}

/// Stored professional record, reduced to the fields availability needs.
///
/// Unrelated fields of the record (name, specialty, price...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub weekly_availability: BTreeMap<DayOfWeek, DayDocument>,
    #[serde(default)]
    pub appointment_duration: Option<serde_json::Number>,
}

/// A validated professional profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionalProfile {
    pub id: Option<String>,
    pub schedule: WeeklySchedule,
    pub duration: AppointmentDuration,
}

impl ProfessionalProfile {
    /// Parse and convert a stored profile from JSON.
    ///
    /// # Errors
    /// Returns `SlotError::Json` for malformed JSON or unknown weekday keys,
    /// otherwise any error of [`ProfessionalProfile::try_from`].
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ProfileDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    /// Check the profile against the rules enforced when a professional edits
    /// it: ranges with `start < end` and a duration within 10-120 minutes.
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()?;
        self.duration.check_profile_bounds()?;
        Ok(())
    }

    pub fn is_day_bookable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        availability::is_day_bookable(date, &self.schedule, today)
    }

    pub fn available_slots(
        &self,
        date: NaiveDate,
        booked: &BookedTimes,
        now: NaiveDateTime,
    ) -> Vec<TimeOfDay> {
        availability::available_slots(date, &self.schedule, self.duration, booked, now)
    }
}

impl TryFrom<ProfileDocument> for ProfessionalProfile {
    type Error = SlotError;

    /// # Errors
    /// Returns `SlotError::InvalidTimeFormat` for any non-`HH:MM` time, and
    /// `SlotError::InvalidDuration` for a zero, negative or fractional
    /// duration. A missing duration falls back to 30 minutes.
    fn try_from(document: ProfileDocument) -> Result<Self> {
        let mut schedule = WeeklySchedule::new();
        for (day, raw) in document.weekly_availability {
            let slots = raw
                .slots
                .iter()
                .map(|r| TimeRange::parse(&r.start, &r.end))
                .collect::<Result<Vec<_>>>()?;
            schedule.set_day(
                day,
                DaySchedule {
                    enabled: raw.enabled,
                    slots,
                },
            );
        }

        let duration = match document.appointment_duration {
            None => AppointmentDuration::DEFAULT,
            Some(n) => match n.as_i64() {
                Some(minutes) => AppointmentDuration::new(minutes)?,
                None => AppointmentDuration::from_f64(n.as_f64().unwrap_or(f64::NAN))?,
            },
        };

        Ok(ProfessionalProfile {
            id: document.id,
            schedule,
            duration,
        })
    }
}

impl From<&ProfessionalProfile> for ProfileDocument {
    fn from(profile: &ProfessionalProfile) -> Self {
        let weekly_availability = profile
            .schedule
            .iter()
            .map(|(day, config)| {
                let slots = config
                    .slots
                    .iter()
                    .map(|r| RangeDocument {
                        start: r.start.to_string(),
                        end: r.end.to_string(),
                    })
                    .collect();
                (
                    day,
                    DayDocument {
                        enabled: config.enabled,
                        slots,
                    },
                )
            })
            .collect();

        ProfileDocument {
            id: profile.id.clone(),
            weekly_availability,
            appointment_duration: Some(profile.duration.minutes().into()),
        }
    }
}
