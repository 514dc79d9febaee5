use bellboard_core::StudentStore;
use clap::Args;

use crate::render::{card, Report};

#[derive(Args)]
pub struct NowArgs {
    /// Schedule variant to use instead of the configured one
    #[arg(long)]
    variant: Option<String>,
    /// Resolve at this local time (HH:MM or HH:MM:SS) instead of now
    #[arg(long)]
    at: Option<String>,
    /// Resolve on this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    date: Option<String>,
    /// Print JSON instead of the text card
    #[arg(long)]
    json: bool,
}

pub fn run(args: NowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = super::local_now(args.date.as_deref(), args.at.as_deref())?;
    let (dashboard, _config) = super::open_dashboard(args.variant, now)?;
    let student = StudentStore::open()?.load();
    let report = Report::new(&dashboard, &student, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", card(&report));
    }
    Ok(())
}
