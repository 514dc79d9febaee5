//! The student's own week: class name and room per day and period, plus the
//! room used during SHIELD TIME.
//!
//! The JSON shape is shared by storage and by import/export files:
//!
//! ```text
//! { "shieldRoom": "...", "days": { "Monday": { "Mod 1": { "className": "...", "room": "..." } } } }
//! ```

mod lookup;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};

pub use lookup::{canonical_period_name, day_name, PeriodDetails, ScheduleLine};

pub const SCHOOL_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
pub const INSTRUCTIONAL_PERIODS: u32 = 10;
pub const SHIELD_TIME: &str = "SHIELD TIME";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub room: String,
}

/// Period name (`"Mod 3"`) to entry.
pub type DailySchedule = BTreeMap<String, ScheduleEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSchedule {
    pub shield_room: String,
    pub days: BTreeMap<String, DailySchedule>,
}

impl StudentSchedule {
    /// Every school day with `Mod 1` through `Mod 10`, all fields empty.
    pub fn blank() -> Self {
        let days: BTreeMap<String, DailySchedule> = SCHOOL_DAYS
            .iter()
            .map(|day| {
                let periods: DailySchedule = instructional_periods()
                    .map(|period| (period, ScheduleEntry::default()))
                    .collect();
                (day.to_string(), periods)
            })
            .collect();
        Self {
            shield_room: String::new(),
            days,
        }
    }

    /// Parse and validate a schedule document.
    ///
    /// The document must be an object with a `days` object and a
    /// `shieldRoom` field. Days and periods that are absent are tolerated.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.get("days").is_some_and(serde_json::Value::is_object) {
            return Err(ValidationError::InvalidValue {
                field: "days".into(),
                message: "expected an object keyed by day name".into(),
            }
            .into());
        }
        if value.get("shieldRoom").is_none() {
            return Err(ValidationError::InvalidValue {
                field: "shieldRoom".into(),
                message: "missing".into(),
            }
            .into());
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn entry(&self, day: &str, period: &str) -> Option<&ScheduleEntry> {
        self.days.get(day)?.get(period)
    }

    /// Record the class and room for one instructional period.
    pub fn set_entry(
        &mut self,
        day: &str,
        period: &str,
        class_name: impl Into<String>,
        room: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let day = SCHOOL_DAYS
            .iter()
            .find(|d| d.eq_ignore_ascii_case(day))
            .ok_or_else(|| ValidationError::UnknownDay(day.to_string()))?;
        let canonical = canonical_period_name(period);
        if canonical != period.trim() || !canonical.starts_with("Mod ") {
            return Err(ValidationError::UnknownPeriod(period.to_string()));
        }

        self.days.entry(day.to_string()).or_default().insert(
            canonical.to_string(),
            ScheduleEntry {
                class_name: class_name.into(),
                room: room.into(),
            },
        );
        Ok(())
    }

    pub fn set_shield_room(&mut self, room: impl Into<String>) {
        self.shield_room = room.into();
    }
}

impl Default for StudentSchedule {
    fn default() -> Self {
        Self::blank()
    }
}

/// `"Mod 1"` through `"Mod 10"`.
pub fn instructional_periods() -> impl Iterator<Item = String> {
    (1..=INSTRUCTIONAL_PERIODS).map(|n| format!("Mod {n}"))
}
