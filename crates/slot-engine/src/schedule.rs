//! Recurring weekly schedules.
//!
//! A professional publishes, per weekday, whether they attend and the ranges
//! of the day they attend in. Ranges are kept exactly as configured: they are
//! neither sorted, merged nor deduplicated.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::duration::AppointmentDuration;
use crate::error::{Result, SlotError};
use crate::slots::Slots;
use crate::time::TimeOfDay;

/// Weekday key used by schedules (`"monday"` .. `"sunday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Gregorian weekday of `date`.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open `[start, end)` range of attendance within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        TimeRange { start, end }
    }

    /// Parse both bounds from `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(TimeRange {
            start: TimeOfDay::parse(start)?,
            end: TimeOfDay::parse(end)?,
        })
    }

    /// True when `start >= end`; such a range yields no slots.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Slot start times of this range. Each call returns a fresh iterator.
    pub fn slots(&self, duration: AppointmentDuration) -> Slots {
        Slots::new(self.start, self.end, duration)
    }
}

/// Attendance configuration of a single weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub enabled: bool,
    #[serde(default)]
    pub slots: Vec<TimeRange>,
}

impl DaySchedule {
    pub fn enabled(slots: Vec<TimeRange>) -> Self {
        DaySchedule {
            enabled: true,
            slots,
        }
    }

    pub fn disabled() -> Self {
        DaySchedule::default()
    }

    /// The configured ranges, or none at all when the day is disabled.
    pub fn effective_slots(&self) -> &[TimeRange] {
        if self.enabled {
            &self.slots
        } else {
            &[]
        }
    }

    /// Enabled with at least one range.
    pub fn is_open(&self) -> bool {
        !self.effective_slots().is_empty()
    }
}

/// Weekday -> day configuration. A weekday may be missing entirely.
///
/// [`WeeklySchedule::new`] is empty (closed every day), while
/// [`WeeklySchedule::default`] is the template offered to a newly registered
/// professional: Monday to Friday 09:00-17:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: BTreeMap<DayOfWeek, DaySchedule>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        WeeklySchedule {
            days: BTreeMap::new(),
        }
    }

    /// Builder-style insert, replacing any previous entry for `day`.
    pub fn with_day(mut self, day: DayOfWeek, schedule: DaySchedule) -> Self {
        self.days.insert(day, schedule);
        self
    }

    pub fn set_day(&mut self, day: DayOfWeek, schedule: DaySchedule) {
        self.days.insert(day, schedule);
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DaySchedule> {
        self.days.get(&day)
    }

    /// Day configuration for the weekday `date` falls on.
    pub fn for_date(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.day(DayOfWeek::of(date))
    }

    /// Entries in Monday-to-Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &DaySchedule)> {
        self.days.iter().map(|(day, schedule)| (*day, schedule))
    }

    /// Check every configured range, enabled or not, has `start < end`.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidRange` for the first offending range.
    pub fn validate(&self) -> Result<()> {
        for (day, schedule) in self.iter() {
            if let Some(range) = schedule.slots.iter().find(|r| r.is_empty()) {
                return Err(SlotError::InvalidRange {
                    day,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        let office_hours = TimeRange::new(TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0));

        DayOfWeek::ALL
            .into_iter()
            .fold(WeeklySchedule::new(), |schedule, day| {
                let config = match day {
                    DayOfWeek::Saturday | DayOfWeek::Sunday => DaySchedule::disabled(),
                    _ => DaySchedule::enabled(vec![office_hours]),
                };
                schedule.with_day(day, config)
            })
    }
}
