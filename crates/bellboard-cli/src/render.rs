//! Plain-text rendering of dashboard state.

use bellboard_core::student::day_name;
use bellboard_core::{Dashboard, PeriodDetails, ResolvedState, StudentSchedule, Urgency};
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

const BAR_WIDTH: usize = 24;

/// Everything the `now` command reports, in one serializable value.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub variant: Option<&'a str>,
    pub day: &'static str,
    pub at: NaiveDateTime,
    pub current: PeriodDetails,
    pub next: PeriodDetails,
    pub state: &'a ResolvedState,
}

impl<'a> Report<'a> {
    pub fn new(dashboard: &'a Dashboard, student: &StudentSchedule, at: NaiveDateTime) -> Self {
        let day = day_name(at.weekday());
        let state = dashboard.state();
        Self {
            variant: dashboard.active_variant(),
            day,
            at,
            current: student.details_for_current(&state.current, day),
            next: student.details_for_entry(state.next.as_ref(), day),
            state,
        }
    }
}

pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

fn countdown_label(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Urgent => "HURRY UP!",
        Urgency::Warning => "time left (hurry)",
        Urgency::Normal => "time left",
    }
}

/// Multi-line dashboard card.
pub fn card(report: &Report<'_>) -> String {
    let state = report.state;
    let mut out = String::new();
    out.push_str(&format!(
        "{} · {}\n\n",
        report.variant.unwrap_or("no schedule"),
        report.day
    ));
    out.push_str(&format!("Current Period: {}\n", report.current.name));
    if !report.current.detail.is_empty() {
        out.push_str(&format!("  {}\n", report.current.detail));
    }
    out.push_str(&format!(
        "  {} {:>3.0}%\n  {} {}\n\n",
        progress_bar(state.percentage_complete, BAR_WIDTH),
        state.percentage_complete,
        state.time_remaining,
        countdown_label(state.urgency)
    ));
    out.push_str(&format!("Up Next: {}\n", report.next.name));
    if !report.next.detail.is_empty() {
        out.push_str(&format!("  {}\n", report.next.detail));
    }
    out
}

/// One-line form used by `watch`.
pub fn status_line(report: &Report<'_>) -> String {
    let state = report.state;
    let current = if report.current.detail.is_empty() {
        report.current.name.clone()
    } else {
        format!("{} ({})", report.current.name, report.current.detail)
    };
    format!(
        "{} {} {} {} | next: {}",
        current,
        progress_bar(state.percentage_complete, BAR_WIDTH / 2),
        state.time_remaining,
        countdown_label(state.urgency),
        report.next.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bellboard_core::bell::BellSchedules;
    use bellboard_core::VariantSelection;
    use chrono::NaiveDate;

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0.0, 4), "[....]");
        assert_eq!(progress_bar(50.0, 4), "[##..]");
        assert_eq!(progress_bar(150.0, 4), "[####]");
    }

    #[test]
    fn card_shows_class_and_countdown() {
        let at = NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let dashboard = Dashboard::new(BellSchedules::builtin(), VariantSelection::Auto, at).unwrap();
        let mut student = StudentSchedule::blank();
        student.set_entry("Monday", "Mod 4", "Biology", "118").unwrap();

        let text = card(&Report::new(&dashboard, &student, at));
        assert!(text.starts_with("M-T-TH-F · Monday"));
        assert!(text.contains("Current Period: Mod 4"));
        assert!(text.contains("Biology"));
        assert!(text.contains("28:00 time left"));
        assert!(text.contains("Up Next: Passing Period"));
    }
}
