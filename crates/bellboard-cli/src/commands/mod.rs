pub mod config;
pub mod my;
pub mod now;
pub mod variants;
pub mod watch;

use bellboard_core::bell::BellSchedules;
use bellboard_core::error::ValidationError;
use bellboard_core::{Config, Dashboard, VariantSelection};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Create a dashboard at `now`. A `--variant` flag wins over the configured
/// selection.
pub fn open_dashboard(
    variant: Option<String>,
    now: NaiveDateTime,
) -> Result<(Dashboard, Config), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let selection = match variant {
        Some(name) => VariantSelection::Manual(name),
        None => config.selection(),
    };
    let dashboard = Dashboard::new(BellSchedules::builtin(), selection, now)?;
    Ok((dashboard, config))
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| ValidationError::InvalidTime(s.to_string()))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| ValidationError::InvalidValue {
        field: "date".into(),
        message: e.to_string(),
    })
}

/// The local wall-clock time, with either half overridable from the command line.
pub fn local_now(
    date: Option<&str>,
    time: Option<&str>,
) -> Result<NaiveDateTime, ValidationError> {
    let now = Local::now().naive_local();
    let date = date.map(parse_date).transpose()?.unwrap_or(now.date());
    let time = time.map(parse_clock_time).transpose()?.unwrap_or(now.time());
    Ok(date.and_time(time))
}
