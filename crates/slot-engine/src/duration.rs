//! Consultation length applied uniformly to every slot of a professional.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SlotError};

/// A positive number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AppointmentDuration(u32);

impl AppointmentDuration {
    /// Used when a professional profile does not set a duration.
    pub const DEFAULT: AppointmentDuration = AppointmentDuration(30);

    /// Shortest duration a professional may configure on their profile.
    pub const PROFILE_MIN_MINUTES: u32 = 10;

    /// Longest duration a professional may configure on their profile.
    pub const PROFILE_MAX_MINUTES: u32 = 120;

    /// # Errors
    /// Returns `SlotError::InvalidDuration` when `minutes` is zero or negative.
    pub fn new(minutes: i64) -> Result<Self> {
        if minutes <= 0 {
            return Err(SlotError::InvalidDuration(format!(
                "{} min (must be a positive number of minutes)",
                minutes
            )));
        }
        u32::try_from(minutes)
            .map(AppointmentDuration)
            .map_err(|_| SlotError::InvalidDuration(format!("{} min is too large", minutes)))
    }

    /// Accept a JSON-style number, rejecting fractional and non-finite values.
    pub fn from_f64(minutes: f64) -> Result<Self> {
        if !minutes.is_finite() || minutes.fract() != 0.0 {
            return Err(SlotError::InvalidDuration(format!(
                "{} min (must be a whole number of minutes)",
                minutes
            )));
        }
        // `as` saturates, so out-of-range values still fail in `new`.
        Self::new(minutes as i64)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn to_chrono(self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.0))
    }

    /// Enforce the bounds a professional may set when editing their profile.
    ///
    /// # Errors
    /// Returns `SlotError::DurationOutOfRange` outside 10..=120 minutes.
    pub fn check_profile_bounds(self) -> Result<Self> {
        if (Self::PROFILE_MIN_MINUTES..=Self::PROFILE_MAX_MINUTES).contains(&self.0) {
            Ok(self)
        } else {
            Err(SlotError::DurationOutOfRange(self.0))
        }
    }
}

impl Default for AppointmentDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for AppointmentDuration {
    type Error = SlotError;

    fn try_from(minutes: i64) -> Result<Self> {
        Self::new(minutes)
    }
}

impl fmt::Display for AppointmentDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}
