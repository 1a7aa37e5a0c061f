//! Tests for booked-times snapshots built from stored appointments.

use chrono::NaiveDate;
use slot_engine::{AppointmentRecord, AppointmentStatus, BookedTimes, SlotError, TimeOfDay};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(doctor: &str, day: NaiveDate, time: &str, status: AppointmentStatus) -> AppointmentRecord {
    AppointmentRecord {
        professional_id: doctor.to_string(),
        date: day,
        time: TimeOfDay::parse(time).unwrap(),
        status,
    }
}

fn times(booked: &BookedTimes) -> Vec<String> {
    booked.iter().map(|t| t.to_string()).collect()
}

#[test]
fn from_times_parses_and_deduplicates() {
    let booked = BookedTimes::from_times(["10:00", "09:30", "10:00"]).unwrap();
    assert_eq!(booked.len(), 2);
    assert_eq!(times(&booked), ["09:30", "10:00"]);
}

#[test]
fn from_times_rejects_unpadded_entries() {
    let result = BookedTimes::from_times(vec!["09:30".to_string(), "9:30".to_string()]);
    assert!(matches!(result, Err(SlotError::InvalidTimeFormat(ref s)) if s == "9:30"));
}

#[test]
fn only_confirmed_bookings_hold_slots() {
    let day = date(2026, 3, 16);
    let records = vec![
        record("1", day, "09:00", AppointmentStatus::Confirmed),
        record("1", day, "09:30", AppointmentStatus::Cancelled),
        record("1", day, "10:00", AppointmentStatus::Completed),
    ];

    let booked = BookedTimes::for_professional_on(&records, Some("1"), day);
    assert_eq!(times(&booked), ["09:00"]);
}

#[test]
fn filters_by_professional_and_date() {
    let day = date(2026, 3, 16);
    let records = vec![
        record("1", day, "09:00", AppointmentStatus::Confirmed),
        record("2", day, "10:00", AppointmentStatus::Confirmed),
        record("1", date(2026, 3, 17), "11:00", AppointmentStatus::Confirmed),
    ];

    let booked = BookedTimes::for_professional_on(&records, Some("1"), day);
    assert_eq!(times(&booked), ["09:00"]);

    let any_professional = BookedTimes::for_professional_on(&records, None, day);
    assert_eq!(times(&any_professional), ["09:00", "10:00"]);
}

#[test]
fn records_deserialize_from_store_shape() {
    let json = r#"[
        {"doctorId":"1","date":"2026-03-16","time":"10:00","status":"Confirmado","patientName":"Ana"},
        {"doctorId":"1","date":"2026-03-16","time":"11:30","status":"Cancelado"}
    ]"#;
    let records: Vec<AppointmentRecord> = serde_json::from_str(json).unwrap();

    assert_eq!(records[0].status, AppointmentStatus::Confirmed);
    assert_eq!(records[1].status, AppointmentStatus::Cancelled);
    assert!(AppointmentStatus::Confirmed.holds_slot());
    assert!(!AppointmentStatus::Cancelled.holds_slot());

    let booked = BookedTimes::for_professional_on(&records, Some("1"), date(2026, 3, 16));
    assert_eq!(times(&booked), ["10:00"]);
}

#[test]
fn unknown_status_is_rejected() {
    let json = r#"{"doctorId":"1","date":"2026-03-16","time":"10:00","status":"Pendiente"}"#;
    assert!(serde_json::from_str::<AppointmentRecord>(json).is_err());
}
