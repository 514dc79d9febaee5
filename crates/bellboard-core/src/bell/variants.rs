//! Built-in bell-time tables and the schedule-variant catalog.

use chrono::Weekday;

use super::table::{PeriodDefinition, Timeline};

pub const REGULAR_VARIANT: &str = "M-T-TH-F";
pub const WEDNESDAY_VARIANT: &str = "Wednesday";

type RawTable = &'static [(&'static str, &'static str, &'static str)];

const M_T_TH_F: RawTable = &[
    ("SHIELD TIME", "08:00", "08:10"),
    ("Mod 1", "08:15", "08:52"),
    ("Mod 2", "08:57", "09:34"),
    ("Mod 3", "09:39", "10:16"),
    ("Mod 4 (Lunch A)", "10:21", "10:58"),
    ("Mod 5 (Lunch B)", "11:03", "11:40"),
    ("Mod 6 (Lunch C)", "11:45", "12:22"),
    ("Mod 7 (Lunch D)", "12:27", "13:04"),
    ("Mod 8", "13:09", "13:46"),
    ("Mod 9", "13:51", "14:28"),
    ("Mod 10", "14:33", "15:10"),
];

const WEDNESDAY: RawTable = &[
    ("Mod 1", "08:00", "08:41"),
    ("Mod 2", "08:46", "09:22"),
    ("Mod 3", "09:27", "10:03"),
    ("Mod 4 (Lunch A)", "10:08", "10:44"),
    ("Mod 5 (Lunch B)", "10:49", "11:25"),
    ("Mod 6 (Lunch C)", "11:30", "12:06"),
    ("Mod 7 (Lunch D)", "12:11", "12:47"),
    ("Mod 8", "12:52", "13:28"),
    ("Mod 9", "13:33", "14:09"),
    ("Mod 10", "14:14", "14:50"),
];

const DISMISSAL_1_10: RawTable = &[
    ("Mod 1", "08:00", "08:31"),
    ("Mod 2", "08:36", "09:02"),
    ("Mod 3", "09:07", "09:33"),
    ("Mod 4 (Lunch A)", "09:38", "10:04"),
    ("Mod 5 (Lunch B)", "10:09", "10:35"),
    ("Mod 6 (Lunch C)", "10:40", "11:06"),
    ("Mod 7 (Lunch D)", "11:11", "11:37"),
    ("Mod 8", "11:42", "12:08"),
    ("Mod 9", "12:13", "12:39"),
    ("Mod 10", "12:44", "13:10"),
];

const DISMISSAL_12_10: RawTable = &[
    ("Mod 1", "08:00", "08:25"),
    ("Mod 2", "08:30", "08:50"),
    ("Mod 3", "08:55", "09:15"),
    ("Mod 4 (Lunch A)", "09:20", "09:40"),
    ("Mod 5 (Lunch B)", "09:45", "10:05"),
    ("Mod 6 (Lunch C)", "10:10", "10:30"),
    ("Mod 7 (Lunch D)", "10:35", "10:55"),
    ("Mod 8", "11:00", "11:20"),
    ("Mod 9", "11:25", "11:45"),
    ("Mod 10", "11:50", "12:10"),
];

const LATE_START: RawTable = &[
    ("Mod 1", "10:00", "10:35"),
    ("Mod 2", "10:40", "11:05"),
    ("Mod 3", "11:10", "11:35"),
    ("Mod 4 (Lunch A)", "11:40", "12:05"),
    ("Mod 5 (Lunch B)", "12:10", "12:35"),
    ("Mod 6 (Lunch C)", "12:40", "13:05"),
    ("Mod 7 (Lunch D)", "13:10", "13:35"),
    ("Mod 8", "13:40", "14:05"),
    ("Mod 9", "14:10", "14:35"),
    ("Mod 10", "14:40", "15:10"),
];

const ASSEMBLY: RawTable = &[
    ("Mod 1", "08:00", "08:40"),
    ("Mod 2", "08:45", "09:20"),
    ("ASSEMBLY OR SHIELD TIME", "09:25", "09:50"),
    ("Mod 3", "09:55", "10:30"),
    ("Mod 4 (Lunch A)", "10:35", "11:10"),
    ("Mod 5 (Lunch B)", "11:15", "11:50"),
    ("Mod 6 (Lunch C)", "11:55", "12:30"),
    ("Mod 7 (Lunch D)", "12:35", "13:10"),
    ("Mod 8", "13:15", "13:50"),
    ("Mod 9", "13:55", "14:30"),
    ("Mod 10", "14:35", "15:10"),
];

const BUILTIN: &[(&str, RawTable)] = &[
    (REGULAR_VARIANT, M_T_TH_F),
    (WEDNESDAY_VARIANT, WEDNESDAY),
    ("1:10 Dismissal", DISMISSAL_1_10),
    ("12:10 Dismissal", DISMISSAL_12_10),
    ("2-Hr Late Start", LATE_START),
    ("Assembly/Rally", ASSEMBLY),
];

/// The variant shown by default on a given weekday.
pub fn default_variant_for(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Wed => WEDNESDAY_VARIANT,
        _ => REGULAR_VARIANT,
    }
}

/// Named, pre-built timelines in catalog order.
#[derive(Debug, Clone, Default)]
pub struct BellSchedules {
    variants: Vec<(String, Timeline)>,
}

impl BellSchedules {
    /// The school's published bell schedules.
    pub fn builtin() -> Self {
        Self::from_definitions(BUILTIN.iter().map(|(name, rows)| {
            let periods: Vec<PeriodDefinition> = rows
                .iter()
                .map(|(period, start, end)| PeriodDefinition::new(*period, *start, *end))
                .collect();
            (name.to_string(), periods)
        }))
    }

    /// Build every variant once. Later duplicates of a name replace earlier ones
    /// in place.
    pub fn from_definitions<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<PeriodDefinition>)>,
    {
        let mut variants: Vec<(String, Timeline)> = Vec::new();
        for (name, periods) in definitions {
            let timeline = Timeline::build(&periods);
            match variants.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = timeline,
                None => variants.push((name, timeline)),
            }
        }
        Self { variants }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Timeline> {
        self.variants
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, timeline)| timeline)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_order() {
        let schedules = BellSchedules::builtin();
        let names: Vec<_> = schedules.names().collect();
        assert_eq!(
            names,
            [
                "M-T-TH-F",
                "Wednesday",
                "1:10 Dismissal",
                "12:10 Dismissal",
                "2-Hr Late Start",
                "Assembly/Rally"
            ]
        );
    }

    #[test]
    fn regular_day_has_passing_periods_between_every_mod() {
        let schedules = BellSchedules::builtin();
        let timeline = schedules.get(REGULAR_VARIANT).unwrap();
        // 11 periods, 10 five-minute gaps.
        assert_eq!(timeline.len(), 21);
        assert_eq!(timeline.iter().filter(|e| e.is_passing()).count(), 10);
        assert_eq!(timeline.first().unwrap().name, "SHIELD TIME");
        assert_eq!(timeline.last().unwrap().end_time, "15:10");
    }

    #[test]
    fn default_variant_by_weekday() {
        assert_eq!(default_variant_for(Weekday::Wed), WEDNESDAY_VARIANT);
        for day in [Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun] {
            assert_eq!(default_variant_for(day), REGULAR_VARIANT);
        }
    }

    #[test]
    fn duplicate_names_replace_in_place() {
        let schedules = BellSchedules::from_definitions([
            ("A".to_string(), vec![PeriodDefinition::new("x", "08:00", "09:00")]),
            ("B".to_string(), vec![]),
            ("A".to_string(), vec![PeriodDefinition::new("y", "10:00", "11:00")]),
        ]);
        assert_eq!(schedules.names().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(schedules.get("A").unwrap().first().unwrap().name, "y");
    }

    #[test]
    fn unknown_variant() {
        assert!(!BellSchedules::builtin().contains("Snow Day"));
    }
}
