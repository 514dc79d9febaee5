//! # Bellboard Core Library
//!
//! This library provides the core logic for the Bellboard school schedule
//! dashboard: which period is on now, how long it has left, and what comes
//! next. The `bellboard` CLI is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Bell tables**: named schedule variants built once into gap-filled timelines
//! - **Resolver**: a pure function from `(timeline, wall-clock time)` to a
//!   [`ResolvedState`] snapshot, re-run on every tick
//! - **Dashboard**: variant selection and the timer loop that drives the resolver
//! - **Storage**: TOML configuration and a SQLite key-value store holding the
//!   student's personal schedule
//!
//! ## Key Components
//!
//! - [`Timeline`]: ordered, contiguous list of periods and passing periods
//! - [`resolve`]: period resolution
//! - [`Dashboard`]: tick-driven session state
//! - [`StudentSchedule`]: per-day class names and rooms

pub mod bell;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod storage;
pub mod student;

pub use bell::{
    resolve, BellSchedules, CurrentPeriod, EntryKind, PeriodDefinition, ResolvedState,
    SystemClock, TimeSource, Timeline, TimelineEntry, Urgency,
};
pub use dashboard::{Dashboard, RunIntervals, VariantSelection};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::DashboardEvent;
pub use storage::{Config, Database, StudentStore};
pub use student::{PeriodDetails, ScheduleEntry, ScheduleLine, StudentSchedule};
