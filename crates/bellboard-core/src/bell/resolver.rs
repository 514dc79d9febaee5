//! Period resolution.
//!
//! [`resolve`] is a pure function of a timeline and a wall-clock time. It is
//! called once per tick and its result replaces the previous state wholesale.
//!
//! ## Evaluation order
//!
//! ```text
//! empty timeline        -> Loading
//! start <= now < end    -> Active(entry)   (first match wins)
//! no valid entries      -> AfterSchool
//! now < first.start     -> BeforeSchool
//! now >= last.end       -> AfterSchool
//! otherwise             -> Unscheduled     (only reachable with gaps in the timeline)
//! ```
//!
//! `first` and `last` are the first and last non-passing entries whose bounds
//! both parse.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::clock::{format_remaining, time_to_millis, DayMillis};
use super::table::{Timeline, TimelineEntry};

/// Remaining time in a passing period below which urgency is `Urgent`.
pub const URGENT_BELOW_MS: i64 = 60_000;
/// Remaining time in a passing period below which urgency is `Warning`.
pub const WARNING_BELOW_MS: i64 = 120_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Normal,
    Warning,
    Urgent,
}

impl Urgency {
    /// Classify the time left in a passing period.
    pub fn for_passing_remaining(remaining_ms: i64) -> Self {
        if remaining_ms < URGENT_BELOW_MS {
            Self::Urgent
        } else if remaining_ms < WARNING_BELOW_MS {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// What occupies the current instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CurrentPeriod {
    /// No schedule variant has been selected yet.
    Loading,
    BeforeSchool,
    AfterSchool,
    /// Inside the day but not covered by any entry. A gap-filled timeline
    /// never produces this.
    Unscheduled,
    Active(TimelineEntry),
}

impl CurrentPeriod {
    pub fn id(&self) -> &str {
        match self {
            Self::Loading => "loading",
            Self::BeforeSchool => "before",
            Self::AfterSchool => "after",
            Self::Unscheduled => "gap",
            Self::Active(entry) => &entry.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Loading => "Loading Schedule...",
            Self::BeforeSchool => "Before School",
            Self::AfterSchool => "School's Out",
            Self::Unscheduled => "Between Periods",
            Self::Active(entry) => &entry.name,
        }
    }

    /// Secondary line shown for sentinel states.
    pub fn tagline(&self) -> &str {
        match self {
            Self::AfterSchool => "Have a great day!",
            _ => "",
        }
    }

    pub fn entry(&self) -> Option<&TimelineEntry> {
        match self {
            Self::Active(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_passing(&self) -> bool {
        self.entry().is_some_and(TimelineEntry::is_passing)
    }
}

/// One evaluation of the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedState {
    pub current: CurrentPeriod,
    pub next: Option<TimelineEntry>,
    pub remaining_ms: i64,
    /// `MM:SS`
    pub time_remaining: String,
    /// 0.0 ..= 100.0
    pub percentage_complete: f64,
    /// Only ever non-normal while a passing period is active.
    pub urgency: Urgency,
}

impl ResolvedState {
    pub fn loading() -> Self {
        Self::sentinel(CurrentPeriod::Loading, None, 0, 0.0)
    }

    fn sentinel(
        current: CurrentPeriod,
        next: Option<TimelineEntry>,
        remaining_ms: i64,
        percentage_complete: f64,
    ) -> Self {
        let remaining_ms = remaining_ms.max(0);
        Self {
            current,
            next,
            remaining_ms,
            time_remaining: format_remaining(remaining_ms),
            percentage_complete,
            urgency: Urgency::Normal,
        }
    }
}

impl Default for ResolvedState {
    fn default() -> Self {
        Self::loading()
    }
}

/// Resolve the state of `timeline` at local wall-clock time `now`.
pub fn resolve(timeline: &Timeline, now: NaiveTime) -> ResolvedState {
    resolve_at(timeline, time_to_millis(now))
}

/// Resolve with `now` given in milliseconds since local midnight.
///
/// Entries with an unparsable bound are skipped, both for matching and for
/// the before/after-school boundaries. A passing period that follows a
/// malformed entry can still be current.
pub fn resolve_at(timeline: &Timeline, now: DayMillis) -> ResolvedState {
    if timeline.is_empty() {
        return ResolvedState::loading();
    }

    for (i, entry) in timeline.iter().enumerate() {
        if !entry.has_valid_times() {
            continue;
        }
        let start = entry.start_ms();
        let end = entry.end_ms();
        if now >= start && now < end {
            return active(entry, timeline.get(i + 1), start, end, now);
        }
    }

    let mut valid = timeline
        .iter()
        .filter(|e| !e.is_passing() && e.has_valid_times());
    let Some(first) = valid.next() else {
        return ResolvedState::sentinel(CurrentPeriod::AfterSchool, None, 0, 100.0);
    };
    let last = valid.last().unwrap_or(first);

    let first_start = first.start_ms();
    if now < first_start {
        return ResolvedState::sentinel(
            CurrentPeriod::BeforeSchool,
            Some(first.clone()),
            first_start - now,
            0.0,
        );
    }

    if now >= last.end_ms() {
        return ResolvedState::sentinel(CurrentPeriod::AfterSchool, None, 0, 100.0);
    }

    let upcoming = timeline
        .iter()
        .find(|e| e.has_valid_times() && e.start_ms() > now);
    let remaining = upcoming.map_or(0, |e| e.start_ms() - now);
    ResolvedState::sentinel(CurrentPeriod::Unscheduled, upcoming.cloned(), remaining, 0.0)
}

fn active(
    entry: &TimelineEntry,
    next: Option<&TimelineEntry>,
    start: DayMillis,
    end: DayMillis,
    now: DayMillis,
) -> ResolvedState {
    let duration = end - start;
    let elapsed = now - start;
    let remaining = end - now;

    let percentage_complete = if duration > 0 {
        (elapsed as f64 / duration as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let urgency = if entry.is_passing() {
        Urgency::for_passing_remaining(remaining)
    } else {
        Urgency::Normal
    };

    ResolvedState {
        current: CurrentPeriod::Active(entry.clone()),
        next: next.cloned(),
        remaining_ms: remaining.max(0),
        time_remaining: format_remaining(remaining),
        percentage_complete,
        urgency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bell::table::{EntryKind, PeriodDefinition};

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn timeline(defs: &[(&str, &str, &str)]) -> Timeline {
        let defs: Vec<_> = defs
            .iter()
            .map(|(n, s, e)| PeriodDefinition::new(*n, *s, *e))
            .collect();
        Timeline::build(&defs)
    }

    #[test]
    fn empty_timeline_is_loading() {
        let state = resolve(&Timeline::default(), at(9, 0, 0));
        assert_eq!(state.current, CurrentPeriod::Loading);
        assert_eq!(state.current.id(), "loading");
        assert!(state.next.is_none());
        assert_eq!(state.time_remaining, "00:00");
        assert_eq!(state.percentage_complete, 0.0);
        assert_eq!(state.urgency, Urgency::Normal);
    }

    #[test]
    fn start_of_period() {
        let tl = timeline(&[("Mod1", "08:00", "08:52")]);
        let state = resolve(&tl, at(8, 0, 0));
        assert_eq!(state.current.name(), "Mod1");
        assert_eq!(state.percentage_complete, 0.0);
        assert_eq!(state.time_remaining, "52:00");
        assert!(state.next.is_none());
    }

    #[test]
    fn end_instant_belongs_to_next_entry() {
        let tl = timeline(&[("Mod1", "08:00", "08:10"), ("Mod2", "08:10", "08:30")]);
        let state = resolve(&tl, at(8, 10, 0));
        assert_eq!(state.current.name(), "Mod2");
        assert_eq!(state.percentage_complete, 0.0);
    }

    #[test]
    fn passing_period_urgency() {
        let tl = timeline(&[("Mod1", "08:00", "08:10"), ("Mod2", "08:15", "08:30")]);

        let state = resolve(&tl, at(8, 12, 0));
        assert!(state.current.is_passing());
        assert_eq!(state.time_remaining, "03:00");
        assert_eq!(state.urgency, Urgency::Normal);
        assert_eq!(state.next.as_ref().map(|e| e.name.as_str()), Some("Mod2"));

        let state = resolve(&tl, at(8, 13, 30));
        assert_eq!(state.urgency, Urgency::Warning);

        let state = resolve(&tl, at(8, 14, 5));
        assert_eq!(state.remaining_ms, 55_000);
        assert_eq!(state.urgency, Urgency::Urgent);
    }

    #[test]
    fn urgency_thresholds_are_exact() {
        assert_eq!(Urgency::for_passing_remaining(120_000), Urgency::Normal);
        assert_eq!(Urgency::for_passing_remaining(119_999), Urgency::Warning);
        assert_eq!(Urgency::for_passing_remaining(60_000), Urgency::Warning);
        assert_eq!(Urgency::for_passing_remaining(59_999), Urgency::Urgent);
    }

    #[test]
    fn real_period_named_like_passing_is_not_urgent() {
        let tl = Timeline::from_entries(vec![TimelineEntry {
            id: "m0".into(),
            kind: EntryKind::Period,
            name: "Passing Period".into(),
            start_time: "08:00".into(),
            end_time: "08:05".into(),
            class: String::new(),
        }]);
        let state = resolve(&tl, at(8, 4, 30));
        assert_eq!(state.urgency, Urgency::Normal);
    }

    #[test]
    fn before_school() {
        let tl = timeline(&[("Mod1", "08:00", "08:52")]);
        let state = resolve(&tl, at(7, 30, 0));
        assert_eq!(state.current, CurrentPeriod::BeforeSchool);
        assert_eq!(state.next.as_ref().unwrap().name, "Mod1");
        assert_eq!(state.time_remaining, "30:00");
        assert_eq!(state.percentage_complete, 0.0);
    }

    #[test]
    fn after_school() {
        let tl = timeline(&[("Mod1", "08:00", "08:52")]);
        let state = resolve(&tl, at(9, 0, 0));
        assert_eq!(state.current, CurrentPeriod::AfterSchool);
        assert_eq!(state.current.tagline(), "Have a great day!");
        assert!(state.next.is_none());
        assert_eq!(state.time_remaining, "00:00");
        assert_eq!(state.percentage_complete, 100.0);
    }

    #[test]
    fn after_school_starts_at_last_end() {
        let tl = timeline(&[("Mod1", "08:00", "08:52")]);
        let state = resolve(&tl, at(8, 52, 0));
        assert_eq!(state.current, CurrentPeriod::AfterSchool);
    }

    #[test]
    fn zero_length_period_is_never_current() {
        let tl = timeline(&[("Blip", "08:00", "08:00"), ("Mod1", "08:00", "08:30")]);
        let state = resolve(&tl, at(8, 0, 0));
        assert_eq!(state.current.name(), "Mod1");
    }

    #[test]
    fn uncovered_gap_is_unscheduled() {
        let entry = |id: &str, start: &str, end: &str| TimelineEntry {
            id: id.into(),
            kind: EntryKind::Period,
            name: id.into(),
            start_time: start.into(),
            end_time: end.into(),
            class: String::new(),
        };
        let tl = Timeline::from_entries(vec![entry("a", "08:00", "08:10"), entry("b", "08:20", "08:30")]);
        let state = resolve(&tl, at(8, 15, 0));
        assert_eq!(state.current, CurrentPeriod::Unscheduled);
        assert_eq!(state.next.as_ref().unwrap().id, "b");
        assert_eq!(state.time_remaining, "05:00");
    }

    #[test]
    fn malformed_entry_never_becomes_current() {
        let tl = timeline(&[("Broken", "08:30", "bad"), ("Mod1", "09:00", "09:30")]);
        // "Broken" has an always-past end, so 08:45 matches nothing.
        let state = resolve(&tl, at(8, 45, 0));
        assert_ne!(state.current.name(), "Broken");
    }

    #[test]
    fn malformed_last_end_means_after_school_once_unmatched() {
        let tl = timeline(&[("Mod1", "08:00", "08:30"), ("Mod2", "08:30", "")]);
        let state = resolve(&tl, at(9, 0, 0));
        assert_eq!(state.current, CurrentPeriod::AfterSchool);
    }

    #[test]
    fn malformed_start_is_never_active() {
        let tl = timeline(&[("Broken", "", "08:10"), ("Mod1", "08:15", "08:30")]);
        for t in [at(0, 0, 0), at(7, 0, 0), at(8, 5, 0), at(8, 9, 59)] {
            let state = resolve(&tl, t);
            assert!(state.current.entry().is_none(), "{t}: {:?}", state.current);
        }
    }

    #[test]
    fn before_school_uses_first_valid_entry() {
        let tl = timeline(&[("Broken", "", "08:10"), ("Mod1", "08:15", "08:30")]);
        let state = resolve(&tl, at(7, 0, 0));
        assert_eq!(state.current, CurrentPeriod::BeforeSchool);
        assert_eq!(state.next.as_ref().unwrap().name, "Mod1");
        assert_eq!(state.time_remaining, "75:00");
        assert_eq!(state.percentage_complete, 0.0);

        let state = resolve(&tl, at(8, 20, 0));
        assert_eq!(state.current.name(), "Mod1");
        assert!((state.percentage_complete - 100.0 / 3.0).abs() < 1e-9);

        let state = resolve(&tl, at(8, 12, 0));
        assert!(state.current.is_passing());
    }

    #[test]
    fn all_malformed_is_after_school() {
        let tl = timeline(&[("Broken", "", "nope")]);
        let state = resolve(&tl, at(9, 0, 0));
        assert_eq!(state.current, CurrentPeriod::AfterSchool);
    }

    #[test]
    fn urgency_boundaries_through_resolver() {
        let tl = timeline(&[("Mod1", "08:00", "08:10"), ("Mod2", "08:15", "08:30")]);
        let passing_end = tl.get(1).unwrap().end_ms();
        let cases = [
            (120_000, Urgency::Normal),
            (119_999, Urgency::Warning),
            (60_000, Urgency::Warning),
            (59_999, Urgency::Urgent),
        ];
        for (left, expected) in cases {
            let state = resolve_at(&tl, passing_end - left);
            assert!(state.current.is_passing());
            assert_eq!(state.remaining_ms, left);
            assert_eq!(state.urgency, expected, "{left} ms left");
        }
    }
}
