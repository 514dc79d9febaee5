use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{StudentSchedule, SHIELD_TIME};
use crate::bell::{format_12_hour, CurrentPeriod, TimelineEntry};

/// Strip a parenthetical suffix from an instructional period name:
/// `"Mod 4 (Lunch A)"` becomes `"Mod 4"`. Names that do not start with
/// `Mod <digits>` are returned unchanged.
pub fn canonical_period_name(name: &str) -> &str {
    let name = name.trim();
    let Some(rest) = name.strip_prefix("Mod ") else {
        return name;
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return name;
    }
    &name[.."Mod ".len() + digits]
}

pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Headline and secondary line for the current or next period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDetails {
    pub name: String,
    pub detail: String,
}

/// One row of the full-day listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleLine {
    pub id: String,
    pub name: String,
    pub starts: String,
    pub ends: String,
    /// `None` for periods that carry no personal data.
    pub detail: Option<String>,
}

impl StudentSchedule {
    /// Details for an upcoming entry; `None` renders as `---`.
    pub fn details_for_entry(&self, entry: Option<&TimelineEntry>, day: &str) -> PeriodDetails {
        let Some(entry) = entry else {
            return PeriodDetails {
                name: "---".into(),
                detail: String::new(),
            };
        };

        let canonical = canonical_period_name(&entry.name);
        let detail = if canonical == SHIELD_TIME {
            if self.shield_room.is_empty() {
                String::new()
            } else {
                format!("Room: {}", self.shield_room)
            }
        } else if canonical.starts_with("Mod") {
            self.entry(day, canonical)
                .map(|e| e.class_name.clone())
                .unwrap_or_default()
        } else {
            entry.class.clone()
        };

        PeriodDetails {
            name: canonical.to_string(),
            detail,
        }
    }

    pub fn details_for_current(&self, current: &CurrentPeriod, day: &str) -> PeriodDetails {
        match current.entry() {
            Some(entry) => self.details_for_entry(Some(entry), day),
            None => PeriodDetails {
                name: current.name().to_string(),
                detail: current.tagline().to_string(),
            },
        }
    }

    /// Row for the full-day listing. Passing periods are not listed.
    pub fn schedule_line(&self, entry: &TimelineEntry, day: &str) -> Option<ScheduleLine> {
        if entry.is_passing() {
            return None;
        }

        let canonical = canonical_period_name(&entry.name);
        let detail = if canonical == SHIELD_TIME {
            Some(if self.shield_room.is_empty() {
                "Not set".to_string()
            } else {
                format!("Room: {}", self.shield_room)
            })
        } else if canonical.starts_with("Mod") {
            let found = self.entry(day, canonical);
            let class_name = found
                .map(|e| e.class_name.as_str())
                .filter(|c| !c.is_empty())
                .unwrap_or("Not set");
            Some(match found.map(|e| e.room.as_str()).filter(|r| !r.is_empty()) {
                Some(room) => format!("{class_name} - Rm {room}"),
                None => class_name.to_string(),
            })
        } else {
            None
        };

        Some(ScheduleLine {
            id: entry.id.clone(),
            name: canonical.to_string(),
            starts: format_12_hour(&entry.start_time),
            ends: format_12_hour(&entry.end_time),
            detail,
        })
    }
}
