//! Bookable-slot computation for a single professional.
//!
//! Answers the two questions the booking calendar asks for every date it
//! renders: is this date bookable at all, and which start times can still be
//! offered on it. Everything here is a pure function of its arguments, "now"
//! included, so the same inputs always produce the same slots.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, trace};

use crate::booking::BookedTimes;
use crate::duration::AppointmentDuration;
use crate::error::Result;
use crate::schedule::WeeklySchedule;
use crate::time::TimeOfDay;

/// Whether `date` can be offered in the booking calendar.
///
/// A date is not bookable when it lies before `today`, or when its weekday has
/// no schedule entry, is disabled, or has no ranges.
pub fn is_day_bookable(date: NaiveDate, schedule: &WeeklySchedule, today: NaiveDate) -> bool {
    if date < today {
        return false;
    }
    schedule.for_date(date).is_some_and(|day| day.is_open())
}

/// Compute the start times still offerable on `date`.
///
/// Slots of every range of the day are generated in configuration order and
/// concatenated. Booked times are removed, and when `date` is the calendar date
/// of `now`, so is every time not strictly after `now` (minute precision).
/// Overlapping ranges may produce the same time twice; both are kept.
///
/// # Arguments
///
/// * `date` -- The calendar date being booked.
/// * `schedule` -- The professional's recurring weekly schedule.
/// * `duration_minutes` -- Consultation length; also the spacing between slots.
/// * `booked` -- Times already taken on `date` by active bookings.
/// * `now` -- Current local wall-clock time of the clinic.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` if `duration_minutes <= 0`, whether or
/// not the date is bookable.
pub fn compute_available_slots(
    date: NaiveDate,
    schedule: &WeeklySchedule,
    duration_minutes: i64,
    booked: &BookedTimes,
    now: NaiveDateTime,
) -> Result<Vec<TimeOfDay>> {
    let duration = AppointmentDuration::new(duration_minutes)?;
    Ok(available_slots(date, schedule, duration, booked, now))
}

/// Typed form of [`compute_available_slots`] for an already validated duration.
pub fn available_slots(
    date: NaiveDate,
    schedule: &WeeklySchedule,
    duration: AppointmentDuration,
    booked: &BookedTimes,
    now: NaiveDateTime,
) -> Vec<TimeOfDay> {
    let today = now.date();
    if !is_day_bookable(date, schedule, today) {
        trace!(%date, "date not bookable");
        return Vec::new();
    }
    let Some(day) = schedule.for_date(date) else {
        return Vec::new();
    };

    let candidates: Vec<TimeOfDay> = day
        .effective_slots()
        .iter()
        .flat_map(|range| range.slots(duration))
        .collect();
    let candidate_count = candidates.len();

    let cutoff = (date == today).then(|| TimeOfDay::from_naive_time(now.time()));

    let free: Vec<TimeOfDay> = candidates
        .into_iter()
        .filter(|t| !booked.contains(*t))
        .filter(|t| cutoff.is_none_or(|c| *t > c))
        .collect();

    debug!(
        %date,
        %duration,
        candidates = candidate_count,
        booked = booked.len(),
        free = free.len(),
        "computed available slots"
    );

    free
}

/// The bookable dates in `[from, from + days)`, ascending.
pub fn bookable_dates(
    from: NaiveDate,
    days: u32,
    schedule: &WeeklySchedule,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    from.iter_days()
        .take(days as usize)
        .filter(|date| is_day_bookable(*date, schedule, today))
        .collect()
}

/// Find the earliest free slot scanning forward from `from` for `days` days.
///
/// `booked_for` supplies the booking snapshot of each date visited, so a caller
/// backed by a database only queries the dates actually inspected. Returns
/// `None` when nothing is free inside the horizon.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` if `duration_minutes <= 0`.
pub fn next_available_slot<F>(
    from: NaiveDate,
    days: u32,
    schedule: &WeeklySchedule,
    duration_minutes: i64,
    mut booked_for: F,
    now: NaiveDateTime,
) -> Result<Option<(NaiveDate, TimeOfDay)>>
where
    F: FnMut(NaiveDate) -> BookedTimes,
{
    let duration = AppointmentDuration::new(duration_minutes)?;
    let today = now.date();

    for date in from.iter_days().take(days as usize) {
        if !is_day_bookable(date, schedule, today) {
            continue;
        }
        let booked = booked_for(date);
        if let Some(first) = available_slots(date, schedule, duration, &booked, now)
            .into_iter()
            .next()
        {
            return Ok(Some((date, first)));
        }
    }

    Ok(None)
}
