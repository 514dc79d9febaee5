//! Bell tables and period resolution.
//!
//! - [`table`]: builds gap-filled timelines from bell-table rows
//! - [`resolver`]: maps a timeline and a wall-clock time to a [`ResolvedState`]
//! - [`variants`]: the built-in schedule variants
//! - [`clock`]: time parsing, formatting and the [`TimeSource`] capability

pub mod clock;
pub mod resolver;
pub mod table;
pub mod variants;

pub use clock::{
    format_12_hour, format_remaining, parse_bell_time, DayMillis, FixedClock, SystemClock,
    TimeSource, ALWAYS_PAST,
};
pub use resolver::{resolve, resolve_at, CurrentPeriod, ResolvedState, Urgency};
pub use table::{EntryKind, PeriodDefinition, Timeline, TimelineEntry, PASSING_PERIOD_NAME};
pub use variants::{default_variant_for, BellSchedules, REGULAR_VARIANT, WEDNESDAY_VARIANT};
