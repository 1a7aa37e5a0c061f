//! Meeting windows -- the absolute start/end of a booked consultation, as
//! needed when creating the calendar event that carries the video link.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::dst::DstPolicy;
use crate::duration::AppointmentDuration;
use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// Timezone the clinic operates in when none is configured.
pub const DEFAULT_TIMEZONE: &str = "America/Argentina/Buenos_Aires";

/// Absolute interval of one consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MeetingWindow {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Parse an IANA timezone identifier.
///
/// # Errors
/// Returns `SlotError::InvalidTimezone` if `timezone` is not a known zone.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| SlotError::InvalidTimezone(timezone.to_string()))
}

/// Compute the UTC window of a slot booked at `time` on `date`, local to
/// `timezone`. The end is always exactly `duration` after the start.
///
/// # Errors
/// Returns `SlotError::InvalidTimezone` for an unknown zone and
/// `SlotError::NonexistentLocalTime` when `policy` rejects a DST gap.
pub fn meeting_window(
    date: NaiveDate,
    time: TimeOfDay,
    duration: AppointmentDuration,
    timezone: &str,
    policy: DstPolicy,
) -> Result<MeetingWindow> {
    let tz = parse_timezone(timezone)?;
    let start = policy.resolve(date.and_time(time.to_naive_time()), tz)?;
    Ok(MeetingWindow {
        start,
        end: start + duration.to_chrono(),
    })
}

/// Local wall-clock time in `timezone` at the given instant.
pub fn local_time_at(instant: DateTime<Utc>, timezone: &str) -> Result<NaiveDateTime> {
    let tz = parse_timezone(timezone)?;
    Ok(instant.with_timezone(&tz).naive_local())
}

/// Current local wall-clock time in `timezone`, the "now" the availability
/// functions expect.
pub fn local_now(timezone: &str) -> Result<NaiveDateTime> {
    local_time_at(Utc::now(), timezone)
}
