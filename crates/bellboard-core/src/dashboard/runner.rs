//! Timer-driven dashboard loop.
//!
//! Two fixed-rate timers drive the session: a fast tick that re-resolves the
//! current period and a slow check for the weekday's default variant. The
//! loop polls on fixed intervals rather than sleeping until the next bell;
//! a one-second tick keeps the countdown current and costs nothing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use super::Dashboard;
use crate::bell::TimeSource;
use crate::events::DashboardEvent;
use crate::storage::DashboardConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunIntervals {
    pub tick: Duration,
    pub variant_refresh: Duration,
}

impl Default for RunIntervals {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            variant_refresh: Duration::from_secs(60),
        }
    }
}

impl From<&DashboardConfig> for RunIntervals {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            tick: config.tick_interval(),
            variant_refresh: config.variant_refresh_interval(),
        }
    }
}

/// Drive `dashboard` until `shutdown` carries `true` or its sender is dropped.
///
/// `on_update` runs after every tick, and after every variant refresh that
/// switched variants, with the events that step produced. Both timers stop
/// when the loop returns; the dashboard is handed back to the caller.
pub async fn run<F>(
    mut dashboard: Dashboard,
    clock: Arc<dyn TimeSource>,
    intervals: RunIntervals,
    mut shutdown: watch::Receiver<bool>,
    mut on_update: F,
) -> Dashboard
where
    F: FnMut(&Dashboard, &[DashboardEvent]) + Send,
{
    if *shutdown.borrow() {
        return dashboard;
    }

    let mut tick = tokio::time::interval(intervals.tick);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut refresh = tokio::time::interval(intervals.variant_refresh);
    refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::debug!(?intervals, "dashboard loop started");

    loop {
        tokio::select! {
            biased;

            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
            _ = refresh.tick() => {
                let events = dashboard.refresh_default_variant(clock.now());
                if !events.is_empty() {
                    on_update(&dashboard, &events);
                }
            }
            _ = tick.tick() => {
                let events = dashboard.tick(clock.now());
                on_update(&dashboard, &events);
            }
        }
    }

    tracing::debug!("dashboard loop stopped");
    dashboard
}
