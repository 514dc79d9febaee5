use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::bell::Urgency;

/// Every visible change on the dashboard produces an Event.
/// Display surfaces may react to them; the state itself is always read
/// from the latest snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DashboardEvent {
    /// The active schedule variant was switched, manually or by the
    /// weekday default.
    VariantChanged {
        from: Option<String>,
        to: String,
        at: NaiveDateTime,
    },
    /// A different period (or sentinel state) became current.
    PeriodChanged {
        from: String,
        to: String,
        name: String,
        at: NaiveDateTime,
    },
    /// Passing-period urgency moved to another tier.
    UrgencyChanged {
        from: Urgency,
        to: Urgency,
        at: NaiveDateTime,
    },
}
