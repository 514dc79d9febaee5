//! Integration tests for timeline building and period resolution.

use bellboard_core::bell::{resolve, BellSchedules, REGULAR_VARIANT, WEDNESDAY_VARIANT};
use bellboard_core::{CurrentPeriod, PeriodDefinition, Timeline, Urgency};
use chrono::NaiveTime;

fn at(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn single_period_scenarios() {
    let timeline = Timeline::build(&[PeriodDefinition::new("Mod1", "08:00", "08:52")]);

    let state = resolve(&timeline, at(8, 0, 0));
    assert_eq!(state.current.name(), "Mod1");
    assert_eq!(state.percentage_complete, 0.0);
    assert_eq!(state.time_remaining, "52:00");

    let state = resolve(&timeline, at(7, 30, 0));
    assert_eq!(state.current, CurrentPeriod::BeforeSchool);
    assert_eq!(state.next.as_ref().map(|e| e.name.as_str()), Some("Mod1"));
    assert_eq!(state.time_remaining, "30:00");

    let state = resolve(&timeline, at(9, 0, 0));
    assert_eq!(state.current, CurrentPeriod::AfterSchool);
    assert_eq!(state.percentage_complete, 100.0);
    assert_eq!(state.time_remaining, "00:00");
}

#[test]
fn gap_scenario() {
    let timeline = Timeline::build(&[
        PeriodDefinition::new("Mod1", "08:00", "08:10"),
        PeriodDefinition::new("Mod2", "08:15", "08:30"),
    ]);
    let passing = timeline.get(1).unwrap();
    assert!(passing.is_passing());
    assert_eq!((passing.start_time.as_str(), passing.end_time.as_str()), ("08:10", "08:15"));

    let state = resolve(&timeline, at(8, 12, 0));
    assert!(state.current.is_passing());
    assert_eq!(state.time_remaining, "03:00");
    assert_eq!(state.urgency, Urgency::Normal);

    let state = resolve(&timeline, at(8, 14, 5));
    assert_eq!(state.time_remaining, "00:55");
    assert_eq!(state.urgency, Urgency::Urgent);
}

#[test]
fn regular_day_walkthrough() {
    let schedules = BellSchedules::builtin();
    let timeline = schedules.get(REGULAR_VARIANT).unwrap();

    let state = resolve(timeline, at(7, 45, 0));
    assert_eq!(state.current, CurrentPeriod::BeforeSchool);
    assert_eq!(state.next.unwrap().name, "SHIELD TIME");

    let state = resolve(timeline, at(10, 30, 0));
    assert_eq!(state.current.name(), "Mod 4 (Lunch A)");
    assert_eq!(state.next.unwrap().name, "Passing Period");
    assert_eq!(state.time_remaining, "28:00");

    let state = resolve(timeline, at(14, 31, 30));
    assert!(state.current.is_passing());
    assert_eq!(state.urgency, Urgency::Warning);
    assert_eq!(state.next.unwrap().name, "Mod 10");

    let state = resolve(timeline, at(15, 10, 0));
    assert_eq!(state.current, CurrentPeriod::AfterSchool);
}

#[test]
fn every_builtin_variant_is_contiguous() {
    let schedules = BellSchedules::builtin();
    for name in schedules.names() {
        let timeline = schedules.get(name).unwrap();
        for pair in timeline.entries().windows(2) {
            assert_eq!(pair[0].end_time, pair[1].start_time, "gap in {name}");
        }
    }
}

#[test]
fn wednesday_starts_without_shield_time() {
    let schedules = BellSchedules::builtin();
    let timeline = schedules.get(WEDNESDAY_VARIANT).unwrap();
    let state = resolve(timeline, at(8, 0, 0));
    assert_eq!(state.current.name(), "Mod 1");
    assert_eq!(state.current.id(), "m0");
}

#[test]
fn state_serializes_with_tagged_current() {
    let timeline = Timeline::build(&[PeriodDefinition::new("Mod1", "08:00", "08:52")]);
    let json = serde_json::to_value(resolve(&timeline, at(8, 26, 0))).unwrap();
    assert_eq!(json["current"]["state"], "active");
    assert_eq!(json["current"]["name"], "Mod1");
    assert_eq!(json["current"]["start_time"], "08:00");
    assert_eq!(json["urgency"], "normal");
    assert_eq!(json["percentage_complete"], 50.0);

    let json = serde_json::to_value(resolve(&timeline, at(6, 0, 0))).unwrap();
    assert_eq!(json["current"]["state"], "before_school");
}
