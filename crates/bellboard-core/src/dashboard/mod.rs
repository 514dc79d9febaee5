//! Dashboard session.
//!
//! Owns the variant catalog and the current selection, and keeps the latest
//! [`ResolvedState`] snapshot. The session does not read the clock itself:
//! callers pass the time into [`Dashboard::tick`], usually from [`run`].
//!
//! ## Selection
//!
//! ```text
//! Auto ──select_variant──▶ Manual(name)
//!  ▲                           │
//!  └────────use_default────────┘
//! ```
//!
//! Only an `Auto` selection follows the weekday default.

mod runner;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::bell::{default_variant_for, resolve, BellSchedules, ResolvedState, Timeline};
use crate::error::ValidationError;
use crate::events::DashboardEvent;

pub use runner::{run, RunIntervals};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "variant")]
pub enum VariantSelection {
    /// Follow the default variant for the current weekday.
    #[default]
    Auto,
    /// Stay on the named variant until told otherwise.
    Manual(String),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    schedules: BellSchedules,
    selection: VariantSelection,
    active_variant: Option<String>,
    state: ResolvedState,
}

impl Dashboard {
    /// Create a session and resolve it at `now`.
    ///
    /// With `Auto`, the weekday default is used if the catalog has it,
    /// otherwise the first variant. An empty catalog stays in the loading state.
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownVariant`] for a manual selection the
    /// catalog does not contain.
    pub fn new(
        schedules: BellSchedules,
        selection: VariantSelection,
        now: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let active_variant = match &selection {
            VariantSelection::Manual(name) => {
                if !schedules.contains(name) {
                    return Err(ValidationError::UnknownVariant(name.clone()));
                }
                Some(name.clone())
            }
            VariantSelection::Auto => auto_variant(&schedules, now),
        };

        let mut dashboard = Self {
            schedules,
            selection,
            active_variant,
            state: ResolvedState::loading(),
        };
        dashboard.state = dashboard.resolve_now(now);
        Ok(dashboard)
    }

    pub fn schedules(&self) -> &BellSchedules {
        &self.schedules
    }

    pub fn selection(&self) -> &VariantSelection {
        &self.selection
    }

    pub fn active_variant(&self) -> Option<&str> {
        self.active_variant.as_deref()
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.active_variant
            .as_deref()
            .and_then(|name| self.schedules.get(name))
    }

    /// The latest snapshot.
    pub fn state(&self) -> &ResolvedState {
        &self.state
    }

    /// Re-resolve at `now`, replacing the snapshot wholesale.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<DashboardEvent> {
        let next = self.resolve_now(now);
        let mut events = Vec::new();

        // Ids repeat across variants, so compare whole entries.
        if next.current != self.state.current {
            tracing::debug!(
                from = self.state.current.id(),
                to = next.current.id(),
                name = next.current.name(),
                "period changed"
            );
            events.push(DashboardEvent::PeriodChanged {
                from: self.state.current.id().to_string(),
                to: next.current.id().to_string(),
                name: next.current.name().to_string(),
                at: now,
            });
        }
        if next.urgency != self.state.urgency {
            events.push(DashboardEvent::UrgencyChanged {
                from: self.state.urgency,
                to: next.urgency,
                at: now,
            });
        }

        self.state = next;
        events
    }

    /// Switch to `name` and pin it as a manual selection.
    pub fn select_variant(
        &mut self,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<DashboardEvent>, ValidationError> {
        if !self.schedules.contains(name) {
            return Err(ValidationError::UnknownVariant(name.to_string()));
        }
        self.selection = VariantSelection::Manual(name.to_string());
        Ok(self.switch_to(name.to_string(), now))
    }

    /// Drop a manual selection and follow the weekday default again.
    pub fn use_default(&mut self, now: NaiveDateTime) -> Vec<DashboardEvent> {
        self.selection = VariantSelection::Auto;
        self.refresh_default_variant(now)
    }

    /// The periodic default check. Does nothing under a manual selection or
    /// when the default is already active.
    pub fn refresh_default_variant(&mut self, now: NaiveDateTime) -> Vec<DashboardEvent> {
        if self.selection != VariantSelection::Auto {
            return Vec::new();
        }
        match auto_variant(&self.schedules, now) {
            Some(default) if self.active_variant.as_deref() != Some(default.as_str()) => {
                self.switch_to(default, now)
            }
            _ => Vec::new(),
        }
    }

    fn switch_to(&mut self, name: String, now: NaiveDateTime) -> Vec<DashboardEvent> {
        if self.active_variant.as_deref() == Some(name.as_str()) {
            return Vec::new();
        }
        tracing::info!(
            from = self.active_variant.as_deref().unwrap_or("-"),
            to = %name,
            "schedule variant changed"
        );
        let from = self.active_variant.replace(name.clone());
        let mut events = vec![DashboardEvent::VariantChanged { from, to: name, at: now }];
        events.extend(self.tick(now));
        events
    }

    fn resolve_now(&self, now: NaiveDateTime) -> ResolvedState {
        match self.timeline() {
            Some(timeline) => resolve(timeline, now.time()),
            None => ResolvedState::loading(),
        }
    }
}

fn auto_variant(schedules: &BellSchedules, now: NaiveDateTime) -> Option<String> {
    let default = default_variant_for(now.weekday());
    if schedules.contains(default) {
        Some(default.to_string())
    } else {
        schedules.names().next().map(str::to_string)
    }
}
