//! # slot-engine
//!
//! Deterministic appointment slot availability for telemedicine booking.
//!
//! Given a professional's recurring weekly schedule, a fixed consultation
//! duration and the times already booked on a date, the engine computes which
//! start times can still be offered, hiding those already past when the date
//! is today. "Now" is always passed in, never read from the system clock by
//! the computation itself.
//!
//! ## Modules
//!
//! - [`time`] — strict `HH:MM` time-of-day values
//! - [`duration`] — consultation length and its configuration bounds
//! - [`schedule`] — weekly schedule, day and range types
//! - [`slots`] — expand a range into slot start times
//! - [`availability`] — bookable dates and free slots for a date
//! - [`booking`] — booked-times snapshots from stored appointments
//! - [`profile`] — stored professional profile documents
//! - [`meeting`] — absolute UTC window of a booked consultation
//! - [`dst`] — DST transition policies (skip, shift, etc.)
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{compute_available_slots, BookedTimes, DaySchedule, DayOfWeek, TimeRange, WeeklySchedule};
//!
//! let schedule = WeeklySchedule::new().with_day(
//!     DayOfWeek::Monday,
//!     DaySchedule::enabled(vec![TimeRange::parse("09:00", "11:00").unwrap()]),
//! );
//! let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let now = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let booked = BookedTimes::from_times(["09:30"]).unwrap();
//!
//! let slots = compute_available_slots(monday, &schedule, 30, &booked, now).unwrap();
//! let labels: Vec<String> = slots.iter().map(|t| t.to_string()).collect();
//! assert_eq!(labels, ["09:00", "10:00", "10:30"]);
//! ```

pub mod availability;
pub mod booking;
pub mod dst;
pub mod duration;
pub mod error;
pub mod meeting;
pub mod profile;
pub mod schedule;
pub mod slots;
pub mod time;

pub use availability::{
    available_slots, bookable_dates, compute_available_slots, is_day_bookable, next_available_slot,
};
pub use booking::{AppointmentRecord, AppointmentStatus, BookedTimes};
pub use dst::DstPolicy;
pub use duration::AppointmentDuration;
pub use error::SlotError;
pub use meeting::{meeting_window, MeetingWindow};
pub use profile::{ProfessionalProfile, ProfileDocument};
pub use schedule::{DayOfWeek, DaySchedule, TimeRange, WeeklySchedule};
pub use slots::generate_time_slots;
pub use time::TimeOfDay;
