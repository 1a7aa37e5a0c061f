//! Tests for `HH:MM` parsing and slot generation.

use slot_engine::duration::AppointmentDuration;
use slot_engine::{generate_time_slots, SlotError, TimeOfDay, TimeRange};

fn labels(slots: &[TimeOfDay]) -> Vec<String> {
    slots.iter().map(|t| t.to_string()).collect()
}

// ---------------------------------------------------------------------------
// TimeOfDay parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_zero_padded_times() {
    let t = TimeOfDay::parse("09:05").unwrap();
    assert_eq!(t.hour(), 9);
    assert_eq!(t.minute(), 5);
    assert_eq!(t.minute_of_day(), 545);
    assert_eq!(t.to_string(), "09:05");

    assert_eq!(TimeOfDay::parse("00:00").unwrap(), TimeOfDay::MIDNIGHT);
    assert_eq!(TimeOfDay::parse("23:59").unwrap().minute_of_day(), 1439);
}

#[test]
fn rejects_malformed_times() {
    for bad in [
        "9:00", "09:0", "24:00", "09:60", "09:00:00", "0900", "ab:cd", "", " 09:00", "09-00",
        "+9:00", "１２:００",
    ] {
        assert!(
            matches!(TimeOfDay::parse(bad), Err(SlotError::InvalidTimeFormat(ref s)) if s == bad),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn ordering_is_chronological() {
    let early = TimeOfDay::parse("09:30").unwrap();
    let late = TimeOfDay::parse("10:00").unwrap();
    assert!(early < late);
}

#[test]
fn adding_minutes_stops_at_midnight() {
    let t = TimeOfDay::parse("23:30").unwrap();
    assert_eq!(t.checked_add_minutes(29).unwrap().to_string(), "23:59");
    assert!(t.checked_add_minutes(30).is_none());
}

#[test]
fn serializes_as_string() {
    let t = TimeOfDay::parse("14:45").unwrap();
    assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:45\"");
    let back: TimeOfDay = serde_json::from_str("\"14:45\"").unwrap();
    assert_eq!(back, t);
    assert!(serde_json::from_str::<TimeOfDay>("\"2:45\"").is_err());
}

// ---------------------------------------------------------------------------
// generate_time_slots
// ---------------------------------------------------------------------------

#[test]
fn end_bound_is_exclusive() {
    let slots = generate_time_slots("09:00", "11:00", 30).unwrap();
    assert_eq!(labels(&slots), ["09:00", "09:30", "10:00", "10:30"]);
}

#[test]
fn partial_last_slot_is_still_emitted_when_it_starts_before_end() {
    let slots = generate_time_slots("09:00", "10:00", 40).unwrap();
    assert_eq!(labels(&slots), ["09:00", "09:40"]);
}

#[test]
fn duration_longer_than_range_yields_start_only() {
    let slots = generate_time_slots("09:00", "09:15", 60).unwrap();
    assert_eq!(labels(&slots), ["09:00"]);
}

#[test]
fn equal_or_inverted_bounds_yield_nothing() {
    assert!(generate_time_slots("10:00", "10:00", 30).unwrap().is_empty());
    assert!(generate_time_slots("11:00", "09:00", 30).unwrap().is_empty());
}

#[test]
fn range_ending_at_last_minute_does_not_wrap() {
    let slots = generate_time_slots("23:00", "23:59", 20).unwrap();
    assert_eq!(labels(&slots), ["23:00", "23:20", "23:40"]);
}

#[test]
fn zero_and_negative_durations_fail() {
    assert!(matches!(
        generate_time_slots("09:00", "10:00", 0),
        Err(SlotError::InvalidDuration(_))
    ));
    assert!(matches!(
        generate_time_slots("09:00", "10:00", -15),
        Err(SlotError::InvalidDuration(_))
    ));
}

#[test]
fn malformed_bounds_fail() {
    assert!(matches!(
        generate_time_slots("9:00", "10:00", 30),
        Err(SlotError::InvalidTimeFormat(_))
    ));
    assert!(matches!(
        generate_time_slots("09:00", "25:00", 30),
        Err(SlotError::InvalidTimeFormat(_))
    ));
}

#[test]
fn typed_iterator_is_restartable() {
    let range = TimeRange::parse("14:00", "15:00").unwrap();
    let duration = AppointmentDuration::new(20).unwrap();

    let first: Vec<_> = range.slots(duration).collect();
    let second: Vec<_> = range.slots(duration).collect();

    assert_eq!(first, second);
    assert_eq!(labels(&first), ["14:00", "14:20", "14:40"]);
}

// ---------------------------------------------------------------------------
// AppointmentDuration
// ---------------------------------------------------------------------------

#[test]
fn duration_rejects_fractional_minutes() {
    assert!(matches!(
        AppointmentDuration::from_f64(30.5),
        Err(SlotError::InvalidDuration(_))
    ));
    assert!(matches!(
        AppointmentDuration::from_f64(f64::INFINITY),
        Err(SlotError::InvalidDuration(_))
    ));
    assert_eq!(AppointmentDuration::from_f64(45.0).unwrap().minutes(), 45);
}

#[test]
fn duration_profile_bounds() {
    let ok = AppointmentDuration::new(10).unwrap();
    assert!(ok.check_profile_bounds().is_ok());
    assert!(AppointmentDuration::new(120).unwrap().check_profile_bounds().is_ok());

    assert!(matches!(
        AppointmentDuration::new(5).unwrap().check_profile_bounds(),
        Err(SlotError::DurationOutOfRange(5))
    ));
    assert!(matches!(
        AppointmentDuration::new(121).unwrap().check_profile_bounds(),
        Err(SlotError::DurationOutOfRange(121))
    ));
}

#[test]
fn default_duration_is_thirty_minutes() {
    assert_eq!(AppointmentDuration::default().minutes(), 30);
}
