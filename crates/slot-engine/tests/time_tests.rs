//! Tests for `TimeOfDay` and `Interval` construction, parsing and serde.

use slot_engine::{minutes_since_midnight, time_from_minutes, Interval, SlotError, TimeOfDay};

#[test]
fn minutes_since_midnight_is_hour_times_sixty_plus_minute() {
    let t = TimeOfDay::new(14, 40).unwrap();

    assert_eq!(minutes_since_midnight(t), 880);
    assert_eq!(t.minutes_since_midnight(), 880);
}

#[test]
fn time_from_minutes_splits_hour_and_minute() {
    let t = time_from_minutes(1205).unwrap();

    assert_eq!(t.hour(), 20);
    assert_eq!(t.minute(), 5);
}

#[test]
fn out_of_range_components_are_rejected() {
    assert!(matches!(
        TimeOfDay::new(24, 0),
        Err(SlotError::InvalidTimeOfDay(_))
    ));
    assert!(matches!(
        TimeOfDay::new(9, 60),
        Err(SlotError::InvalidTimeOfDay(_))
    ));
}

#[test]
fn parses_and_displays_hh_mm() {
    let t: TimeOfDay = "09:05".parse().unwrap();

    assert_eq!(t, TimeOfDay::new(9, 5).unwrap());
    assert_eq!(t.to_string(), "09:05");
}

#[test]
fn malformed_strings_are_rejected() {
    for bad in ["", "9", "25:00", "12:61", "noon", "12-30"] {
        let result: Result<TimeOfDay, _> = bad.parse();
        assert!(
            matches!(result, Err(SlotError::InvalidTimeOfDay(_))),
            "'{bad}' should not parse"
        );
    }
}

#[test]
fn interval_caches_minute_offsets() {
    let i = Interval::parse("10:30", "10:50").unwrap();

    assert_eq!(i.start_minutes(), 630);
    assert_eq!(i.stop_minutes(), 650);
    assert_eq!(i.start_minutes(), minutes_since_midnight(i.start()));
    assert_eq!(i.stop_minutes(), minutes_since_midnight(i.stop()));
    assert_eq!(i.duration_minutes(), 20);
}

#[test]
fn reversed_interval_is_rejected() {
    let result = Interval::parse("11:00", "10:00");

    assert!(matches!(result, Err(SlotError::InvalidInterval(_))));
}

#[test]
fn zero_length_interval_is_allowed() {
    let i = Interval::parse("12:00", "12:00").unwrap();

    assert_eq!(i.duration_minutes(), 0);
}

#[test]
fn overlap_excludes_touching_intervals() {
    let a = Interval::parse("09:00", "10:00").unwrap();
    let b = Interval::parse("10:00", "11:00").unwrap();
    let c = Interval::parse("09:30", "10:30").unwrap();

    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&b));
}

#[test]
fn interval_serializes_as_hh_mm_strings() {
    let i = Interval::parse("09:00", "09:30").unwrap();

    let json = serde_json::to_string(&i).unwrap();

    assert_eq!(json, r#"{"start":"09:00","stop":"09:30"}"#);
}

#[test]
fn interval_deserialization_validates_order() {
    let ok: Interval = serde_json::from_str(r#"{"start":"09:00","stop":"09:30"}"#).unwrap();
    assert_eq!(ok.start_minutes(), 540);

    let reversed = serde_json::from_str::<Interval>(r#"{"start":"10:00","stop":"09:30"}"#);
    assert!(reversed.is_err());
}

#[test]
fn empty_interval_never_overlaps() {
    let outer = Interval::parse("10:00", "11:00").unwrap();
    let inside = Interval::parse("10:30", "10:30").unwrap();

    assert!(!outer.overlaps(&inside));
    assert!(!inside.overlaps(&outer));
}
