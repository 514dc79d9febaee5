//! Wall-clock helpers for bell times.
//!
//! Bell tables carry `"HH:MM"` strings in the device's local time and are
//! compared as milliseconds since local midnight. Nothing in this crate
//! converts between timezones.

use std::sync::Mutex;

use chrono::{Duration, Local, NaiveDateTime, NaiveTime, Timelike};

/// Milliseconds since local midnight.
pub type DayMillis = i64;

/// Substituted for an unparsable bell time. Sorts before every real instant
/// of the day. The resolver ignores entries carrying it.
pub const ALWAYS_PAST: DayMillis = i64::MIN;

/// Parse a `"HH:MM"` bell time.
///
/// Empty strings, strings without a colon, and out-of-range components all
/// yield [`ALWAYS_PAST`] instead of an error.
pub fn parse_bell_time(s: &str) -> DayMillis {
    let Some((hours, minutes)) = s.split_once(':') else {
        return ALWAYS_PAST;
    };
    let (Ok(hours), Ok(minutes)) = (hours.trim().parse::<u32>(), minutes.trim().parse::<u32>())
    else {
        return ALWAYS_PAST;
    };
    NaiveTime::from_hms_opt(hours, minutes, 0)
        .map(time_to_millis)
        .unwrap_or(ALWAYS_PAST)
}

/// Convert a wall-clock time to [`DayMillis`], truncating below a millisecond.
pub fn time_to_millis(time: NaiveTime) -> DayMillis {
    // Leap seconds are reported as nanosecond >= 1e9; fold them into the last millisecond.
    let millis = (time.nanosecond() / 1_000_000).min(999);
    i64::from(time.num_seconds_from_midnight()) * 1000 + i64::from(millis)
}

/// Format a remaining duration as zero-padded `MM:SS`.
///
/// Sub-second remainders are floored; negative input clamps to `00:00`.
/// Minutes are not wrapped into hours, so three hours reads `180:00`.
pub fn format_remaining(ms: i64) -> String {
    if ms < 0 {
        return "00:00".to_string();
    }
    let total_secs = ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Render a `"HH:MM"` bell time as `"h:MM AM"`. Unparsable input renders empty.
pub fn format_12_hour(s: &str) -> String {
    let millis = parse_bell_time(s);
    if millis == ALWAYS_PAST {
        return String::new();
    }
    let secs = (millis / 1000) as u32;
    match NaiveTime::from_num_seconds_from_midnight_opt(secs, 0) {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => String::new(),
    }
}

/// Source of the current local wall-clock time.
///
/// The dashboard never reads the system clock directly so that tests can
/// drive it with deterministic instants.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The device's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A manually driven clock.
#[derive(Debug)]
pub struct FixedClock {
    at: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at: Mutex::new(at) }
    }

    pub fn set(&self, at: NaiveDateTime) {
        if let Ok(mut guard) = self.at.lock() {
            *guard = at;
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut guard) = self.at.lock() {
            *guard += by;
        }
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.at.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
