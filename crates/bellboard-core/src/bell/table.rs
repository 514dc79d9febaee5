//! Schedule table builder.
//!
//! Turns the named periods of a bell table into a chronologically ordered
//! timeline in which every gap between two periods is covered by a
//! synthetic passing period.

use serde::{Deserialize, Serialize};

use super::clock::{parse_bell_time, DayMillis, ALWAYS_PAST};

/// Display name of synthetic gap entries.
pub const PASSING_PERIOD_NAME: &str = "Passing Period";

/// A named period as published in a bell table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDefinition {
    pub name: String,
    /// `"HH:MM"`, 24-hour, local time.
    pub start_time: String,
    /// `"HH:MM"`, 24-hour, local time.
    pub end_time: String,
}

impl PeriodDefinition {
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A period taken from the bell table.
    Period,
    /// Inserted by the builder between two periods.
    Passing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Unique within one timeline; `m<n>` for periods, `p<n>` for passing periods.
    pub id: String,
    pub kind: EntryKind,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    /// Always empty at build time; filled in by personal-schedule lookups.
    #[serde(default)]
    pub class: String,
}

impl TimelineEntry {
    pub fn is_passing(&self) -> bool {
        self.kind == EntryKind::Passing
    }

    pub fn start_ms(&self) -> DayMillis {
        parse_bell_time(&self.start_time)
    }

    pub fn end_ms(&self) -> DayMillis {
        parse_bell_time(&self.end_time)
    }

    /// False when either bound failed to parse.
    pub fn has_valid_times(&self) -> bool {
        self.start_ms() != ALWAYS_PAST && self.end_ms() != ALWAYS_PAST
    }
}

/// An immutable, ordered list of timeline entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Build a gap-filled timeline.
    ///
    /// Periods are sorted by start time with a stable sort, so identical
    /// start times keep their input order. A passing period is inserted only
    /// when a period starts strictly after the previous one ends; back-to-back
    /// and overlapping periods are emitted as-is. Timestamps are not validated.
    pub fn build(periods: &[PeriodDefinition]) -> Self {
        let mut sorted: Vec<&PeriodDefinition> = periods.iter().collect();
        // "HH:MM" is fixed-width, so lexical order is chronological order.
        sorted.sort_by(|a, b| a.start_time.cmp(&b.start_time));

        let mut entries = Vec::with_capacity(sorted.len() * 2);
        let mut id_counter = 0usize;

        for (i, period) in sorted.iter().enumerate() {
            if i > 0 {
                let prev = sorted[i - 1];
                if period.start_time > prev.end_time {
                    entries.push(TimelineEntry {
                        id: format!("p{id_counter}"),
                        kind: EntryKind::Passing,
                        name: PASSING_PERIOD_NAME.to_string(),
                        start_time: prev.end_time.clone(),
                        end_time: period.start_time.clone(),
                        class: String::new(),
                    });
                    id_counter += 1;
                }
            }

            entries.push(TimelineEntry {
                id: format!("m{id_counter}"),
                kind: EntryKind::Period,
                name: period.name.clone(),
                start_time: period.start_time.clone(),
                end_time: period.end_time.clone(),
                class: String::new(),
            });
            id_counter += 1;
        }

        Self { entries }
    }

    /// Wrap entries that were assembled elsewhere. No gap filling or sorting
    /// is performed.
    pub fn from_entries(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&TimelineEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&TimelineEntry> {
        self.entries.last()
    }

    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
