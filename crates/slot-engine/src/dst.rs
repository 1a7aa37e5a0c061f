//! DST transition policies for turning a local slot into an instant.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// Longest DST gap searched when shifting forward.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Policy for local times that fall on a DST transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DstPolicy {
    /// Reject times in the DST gap (e.g., 2:30 AM during spring forward)
    Skip,
    /// Move to the first valid local time after the gap
    ShiftForward,
    /// Keep the offset in effect before the transition
    #[default]
    WallClock,
}

impl DstPolicy {
    /// Resolve a local wall-clock time in `tz` to a UTC instant.
    ///
    /// Ambiguous times (fall back) always resolve to the earlier instant.
    ///
    /// # Errors
    /// Returns `SlotError::NonexistentLocalTime` for a gap under `Skip`, or if
    /// no valid time follows within a day under `ShiftForward`.
    pub fn resolve(self, local: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>> {
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
            LocalResult::None => self.resolve_gap(local, tz),
        }
    }

    fn resolve_gap(self, local: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>> {
        let nonexistent = || SlotError::NonexistentLocalTime(format!("{} in {}", local, tz.name()));

        match self {
            DstPolicy::Skip => Err(nonexistent()),
            DstPolicy::ShiftForward => (1..=MAX_GAP_MINUTES)
                .map(|m| local + Duration::minutes(m))
                .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(nonexistent),
            DstPolicy::WallClock => {
                // Offset just before the gap: a day earlier is always outside it.
                let before = tz
                    .from_local_datetime(&(local - Duration::days(1)))
                    .earliest()
                    .ok_or_else(nonexistent)?;
                let offset = before.offset().fix();
                let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
                Ok(utc.and_utc())
            }
        }
    }
}
