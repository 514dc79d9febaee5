use bellboard_core::bell::{default_variant_for, BellSchedules};
use bellboard_core::error::ValidationError;
use bellboard_core::student::day_name;
use bellboard_core::{Config, ScheduleLine, StudentStore, VariantSelection};
use chrono::Datelike;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum VariantsAction {
    /// List the available bell schedules
    List,
    /// Show the full day for one bell schedule
    Show {
        /// Variant name, e.g. "Wednesday"
        name: String,
        /// Personal classes for this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Always use this variant until `variants auto`
    Use {
        name: String,
    },
    /// Follow the weekday default again
    Auto,
}

pub fn run(action: VariantsAction) -> Result<(), Box<dyn std::error::Error>> {
    let schedules = BellSchedules::builtin();

    match action {
        VariantsAction::List => {
            let config = Config::load_or_default();
            let today = super::local_now(None, None)?;
            let default = default_variant_for(today.weekday());
            let pinned = match config.selection() {
                VariantSelection::Manual(name) => Some(name),
                VariantSelection::Auto => None,
            };
            for name in schedules.names() {
                let mut tags = Vec::new();
                if name == default {
                    tags.push("default today");
                }
                if pinned.as_deref() == Some(name) {
                    tags.push("selected");
                }
                if tags.is_empty() {
                    println!("{name}");
                } else {
                    println!("{name} ({})", tags.join(", "));
                }
            }
        }
        VariantsAction::Show { name, date, json } => {
            let timeline = schedules
                .get(&name)
                .ok_or_else(|| ValidationError::UnknownVariant(name.clone()))?;
            let day = day_name(super::local_now(date.as_deref(), None)?.weekday());
            let student = StudentStore::open()?.load();
            let lines: Vec<ScheduleLine> = timeline
                .iter()
                .filter_map(|entry| student.schedule_line(entry, day))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                println!("{name} · {day}");
                for line in &lines {
                    print!("{:>8} - {:<8}  {}", line.starts, line.ends, line.name);
                    match &line.detail {
                        Some(detail) => println!("  ({detail})"),
                        None => println!(),
                    }
                }
            }
        }
        VariantsAction::Use { name } => {
            if !schedules.contains(&name) {
                return Err(ValidationError::UnknownVariant(name).into());
            }
            let mut config = Config::load()?;
            config.set_selection(&VariantSelection::Manual(name.clone()));
            config.save()?;
            println!("using {name}");
        }
        VariantsAction::Auto => {
            let mut config = Config::load()?;
            config.set_selection(&VariantSelection::Auto);
            config.save()?;
            println!("following the weekday default");
        }
    }
    Ok(())
}
