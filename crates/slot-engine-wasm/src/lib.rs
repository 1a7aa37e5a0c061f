//! WASM bindings for slot-engine.
//!
//! Exposes slot generation, the bookable-day predicate and available-slot
//! computation to the booking front end via `wasm-bindgen`. Profiles and
//! booking lists cross the boundary as JSON strings, dates as `YYYY-MM-DD` and
//! "now" as a local `YYYY-MM-DDTHH:MM[:SS]` string supplied by the caller.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use slot_engine::{AppointmentDuration, BookedTimes, DstPolicy, ProfessionalProfile, TimeOfDay};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct MeetingWindowDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

// ---------------------------------------------------------------------------
// Helpers: parse boundary values, keeping errors as plain strings
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid date '{}': {}", s, e))
}

/// Accepts local datetimes with or without seconds ("2026-10-19T10:15").
fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("Invalid datetime '{}': {}", s, e))
}

fn parse_profile(json: &str) -> Result<ProfessionalProfile, String> {
    ProfessionalProfile::from_json(json).map_err(|e| e.to_string())
}

/// Booked times arrive as a JSON array of "HH:MM" strings, already filtered to
/// the professional, date and active status by the caller's query.
fn parse_booked(json: &str) -> Result<BookedTimes, String> {
    let times: Vec<String> =
        serde_json::from_str(json).map_err(|e| format!("Invalid booked times JSON: {}", e))?;
    BookedTimes::from_times(&times).map_err(|e| e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn generate_time_slots_json(start: &str, end: &str, duration_minutes: f64) -> Result<String, String> {
    let duration = AppointmentDuration::from_f64(duration_minutes).map_err(|e| e.to_string())?;
    let start = TimeOfDay::parse(start).map_err(|e| e.to_string())?;
    let end = TimeOfDay::parse(end).map_err(|e| e.to_string())?;
    let slots: Vec<TimeOfDay> = slot_engine::slots::Slots::new(start, end, duration).collect();
    to_json(&slots)
}

fn is_day_bookable_impl(profile_json: &str, date: &str, today: &str) -> Result<bool, String> {
    let profile = parse_profile(profile_json)?;
    Ok(profile.is_day_bookable(parse_date(date)?, parse_date(today)?))
}

fn compute_available_slots_json(
    profile_json: &str,
    date: &str,
    booked_json: &str,
    now: &str,
) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    let booked = parse_booked(booked_json)?;
    let slots = profile.available_slots(parse_date(date)?, &booked, parse_local_datetime(now)?);
    to_json(&slots)
}

fn bookable_dates_json(profile_json: &str, from: &str, days: u32, today: &str) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    let dates =
        slot_engine::bookable_dates(parse_date(from)?, days, &profile.schedule, parse_date(today)?);
    let labels: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
    to_json(&labels)
}

fn validate_profile_impl(profile_json: &str) -> Result<(), String> {
    parse_profile(profile_json)?
        .validate()
        .map_err(|e| e.to_string())
}

fn meeting_window_json(profile_json: &str, date: &str, time: &str, timezone: &str) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    let time = TimeOfDay::parse(time).map_err(|e| e.to_string())?;
    let window = slot_engine::meeting_window(
        parse_date(date)?,
        time,
        profile.duration,
        timezone,
        DstPolicy::default(),
    )
    .map_err(|e| e.to_string())?;

    to_json(&MeetingWindowDto {
        start: window.start.to_rfc3339(),
        end: window.end.to_rfc3339(),
        duration_minutes: window.duration_minutes(),
    })
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate slot start times in `[start, end)` spaced by `durationMinutes`.
///
/// Returns a JSON array of "HH:MM" strings. Throws on malformed times or a
/// zero, negative or fractional duration.
#[wasm_bindgen(js_name = "generateTimeSlots")]
pub fn generate_time_slots(start: &str, end: &str, duration_minutes: f64) -> Result<String, JsValue> {
    generate_time_slots_json(start, end, duration_minutes).map_err(|e| JsValue::from_str(&e))
}

/// Whether the calendar should allow picking `date`.
#[wasm_bindgen(js_name = "isDayBookable")]
pub fn is_day_bookable(profile_json: &str, date: &str, today: &str) -> Result<bool, JsValue> {
    is_day_bookable_impl(profile_json, date, today).map_err(|e| JsValue::from_str(&e))
}

/// Compute the free slots of `date` for a stored professional profile.
///
/// `booked_json` is a JSON array of "HH:MM" strings; `now` is the clinic's
/// local time. Returns a JSON array of "HH:MM" strings.
#[wasm_bindgen(js_name = "computeAvailableSlots")]
pub fn compute_available_slots(
    profile_json: &str,
    date: &str,
    booked_json: &str,
    now: &str,
) -> Result<String, JsValue> {
    compute_available_slots_json(profile_json, date, booked_json, now)
        .map_err(|e| JsValue::from_str(&e))
}

/// Bookable dates in `[from, from + days)` as a JSON array of "YYYY-MM-DD".
#[wasm_bindgen(js_name = "bookableDates")]
pub fn bookable_dates(profile_json: &str, from: &str, days: u32, today: &str) -> Result<String, JsValue> {
    bookable_dates_json(profile_json, from, days, today).map_err(|e| JsValue::from_str(&e))
}

/// Validate a profile against the editing rules; throws the first violation.
#[wasm_bindgen(js_name = "validateProfile")]
pub fn validate_profile(profile_json: &str) -> Result<(), JsValue> {
    validate_profile_impl(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// UTC window of a consultation as JSON `{start, end, duration_minutes}`.
#[wasm_bindgen(js_name = "meetingWindow")]
pub fn meeting_window(profile_json: &str, date: &str, time: &str, timezone: &str) -> Result<String, JsValue> {
    meeting_window_json(profile_json, date, time, timezone).map_err(|e| JsValue::from_str(&e))
}
