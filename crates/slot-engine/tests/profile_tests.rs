//! Tests for converting stored professional profiles into validated ones.

use chrono::NaiveDate;
use slot_engine::{
    BookedTimes, DayOfWeek, ProfessionalProfile, ProfileDocument, SlotError, WeeklySchedule,
};

const CARDIOLOGIST: &str = r#"{
    "id": "1",
    "title": "Dr.",
    "name": "Juan Pérez",
    "specialty": "Cardiología",
    "price": 3500,
    "weeklyAvailability": {
        "monday": { "enabled": true, "slots": [{ "start": "09:00", "end": "13:00" }, { "start": "15:00", "end": "18:00" }] },
        "tuesday": { "enabled": true, "slots": [{ "start": "09:00", "end": "17:00" }] },
        "saturday": { "enabled": false, "slots": [] },
        "sunday": { "enabled": false, "slots": [] }
    },
    "appointmentDuration": 30,
    "status": "approved"
}"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parses_stored_profile_ignoring_unrelated_fields() {
    let profile = ProfessionalProfile::from_json(CARDIOLOGIST).unwrap();

    assert_eq!(profile.id.as_deref(), Some("1"));
    assert_eq!(profile.duration.minutes(), 30);
    assert_eq!(profile.schedule.day(DayOfWeek::Monday).unwrap().slots.len(), 2);
    assert!(profile.schedule.day(DayOfWeek::Wednesday).is_none());
    assert!(profile.validate().is_ok());
}

#[test]
fn profile_computes_slots_across_both_ranges() {
    let profile = ProfessionalProfile::from_json(CARDIOLOGIST).unwrap();
    let monday = date(2026, 3, 16);
    let now = date(2026, 3, 13).and_hms_opt(18, 0, 0).unwrap();
    let booked = BookedTimes::from_times(["09:00", "15:30"]).unwrap();

    let slots = profile.available_slots(monday, &booked, now);

    assert_eq!(slots.len(), 8 + 6 - 2);
    assert_eq!(slots.first().unwrap().to_string(), "09:30");
    assert_eq!(slots.last().unwrap().to_string(), "17:30");
    assert!(profile.is_day_bookable(monday, now.date()));
    assert!(!profile.is_day_bookable(date(2026, 3, 18), now.date()));
}

#[test]
fn missing_duration_defaults_to_thirty() {
    let profile = ProfessionalProfile::from_json(r#"{"weeklyAvailability":{}}"#).unwrap();
    assert_eq!(profile.duration.minutes(), 30);

    let null_duration =
        ProfessionalProfile::from_json(r#"{"appointmentDuration":null}"#).unwrap();
    assert_eq!(null_duration.duration.minutes(), 30);
}

#[test]
fn missing_availability_means_never_bookable() {
    let profile = ProfessionalProfile::from_json(r#"{"appointmentDuration":20}"#).unwrap();
    assert_eq!(profile.schedule, WeeklySchedule::new());
    assert!(!profile.is_day_bookable(date(2026, 3, 16), date(2026, 3, 10)));
}

#[test]
fn zero_negative_and_fractional_durations_fail() {
    for bad in ["0", "-10", "22.5"] {
        let json = format!(r#"{{"appointmentDuration":{}}}"#, bad);
        assert!(
            matches!(
                ProfessionalProfile::from_json(&json),
                Err(SlotError::InvalidDuration(_))
            ),
            "duration {} should be rejected",
            bad
        );
    }
}

#[test]
fn whole_float_duration_is_accepted() {
    let profile = ProfessionalProfile::from_json(r#"{"appointmentDuration":45.0}"#).unwrap();
    assert_eq!(profile.duration.minutes(), 45);
}

#[test]
fn malformed_time_fails_with_time_format_error() {
    let json = r#"{"weeklyAvailability":{"monday":{"enabled":true,"slots":[{"start":"9:00","end":"12:00"}]}}}"#;
    match ProfessionalProfile::from_json(json) {
        Err(SlotError::InvalidTimeFormat(s)) => assert_eq!(s, "9:00"),
        other => panic!("expected InvalidTimeFormat, got {:?}", other),
    }
}

#[test]
fn malformed_time_on_disabled_day_still_fails() {
    let json = r#"{"weeklyAvailability":{"sunday":{"enabled":false,"slots":[{"start":"10:00","end":"noon"}]}}}"#;
    assert!(matches!(
        ProfessionalProfile::from_json(json),
        Err(SlotError::InvalidTimeFormat(_))
    ));
}

#[test]
fn unknown_weekday_key_is_a_json_error() {
    let json = r#"{"weeklyAvailability":{"funday":{"enabled":true,"slots":[]}}}"#;
    assert!(matches!(
        ProfessionalProfile::from_json(json),
        Err(SlotError::Json(_))
    ));
}

#[test]
fn validate_enforces_profile_bounds() {
    let short = ProfessionalProfile::from_json(r#"{"appointmentDuration":5}"#).unwrap();
    assert!(matches!(short.validate(), Err(SlotError::DurationOutOfRange(5))));

    let inverted = ProfessionalProfile::from_json(
        r#"{"weeklyAvailability":{"friday":{"enabled":true,"slots":[{"start":"13:00","end":"09:00"}]}}}"#,
    )
    .unwrap();
    assert!(matches!(
        inverted.validate(),
        Err(SlotError::InvalidRange {
            day: DayOfWeek::Friday,
            ..
        })
    ));
}

#[test]
fn document_roundtrip_preserves_schedule() {
    let profile = ProfessionalProfile {
        id: Some("new".to_string()),
        schedule: WeeklySchedule::default(),
        duration: Default::default(),
    };

    let document = ProfileDocument::from(&profile);
    let json = serde_json::to_string(&document).unwrap();
    assert!(json.contains("\"weeklyAvailability\""));
    assert!(json.contains("\"appointmentDuration\":30"));

    let back = ProfessionalProfile::from_json(&json).unwrap();
    assert_eq!(back, profile);
}
