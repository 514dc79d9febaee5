use std::path::PathBuf;

use bellboard_core::student::{instructional_periods, SCHOOL_DAYS};
use bellboard_core::StudentStore;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum MyAction {
    /// Show the week at a glance
    Show {
        /// Print JSON in the import/export format
        #[arg(long)]
        json: bool,
    },
    /// Set class and room for one period
    Set {
        /// Day name, e.g. "Monday"
        day: String,
        /// Period, e.g. "Mod 3"
        period: String,
        #[arg(long, default_value = "")]
        class: String,
        #[arg(long, default_value = "")]
        room: String,
    },
    /// Set the SHIELD TIME room
    ShieldRoom {
        room: String,
    },
    /// Replace the personal schedule with a JSON file
    Import {
        path: PathBuf,
    },
    /// Write the personal schedule to a JSON file
    Export {
        path: PathBuf,
    },
    /// Clear every class and room
    Reset,
}

pub fn run(action: MyAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = StudentStore::open()?;

    match action {
        MyAction::Show { json } => {
            let schedule = store.load();
            if json {
                println!("{}", schedule.to_json_pretty()?);
                return Ok(());
            }

            let shield = if schedule.shield_room.is_empty() {
                "Not set".to_string()
            } else {
                format!("Room: {}", schedule.shield_room)
            };
            println!("SHIELD TIME  {shield}");
            for day in SCHOOL_DAYS {
                println!("\n{day}");
                for period in instructional_periods() {
                    let entry = schedule.entry(day, &period);
                    let class_name = entry
                        .map(|e| e.class_name.as_str())
                        .filter(|c| !c.is_empty())
                        .unwrap_or("Not set");
                    match entry.map(|e| e.room.as_str()).filter(|r| !r.is_empty()) {
                        Some(room) => println!("  {period:<7} {class_name}  (Room: {room})"),
                        None => println!("  {period:<7} {class_name}"),
                    }
                }
            }
        }
        MyAction::Set {
            day,
            period,
            class,
            room,
        } => {
            let mut schedule = store.load();
            schedule.set_entry(&day, &period, class, room)?;
            store.save(&schedule)?;
            println!("saved {day} {period}");
        }
        MyAction::ShieldRoom { room } => {
            let mut schedule = store.load();
            schedule.set_shield_room(room);
            store.save(&schedule)?;
            println!("saved SHIELD TIME room");
        }
        MyAction::Import { path } => {
            store.import_from(&path)?;
            println!("imported {}", path.display());
        }
        MyAction::Export { path } => {
            store.export_to(&path)?;
            println!("exported to {}", path.display());
        }
        MyAction::Reset => {
            store.reset()?;
            println!("personal schedule cleared");
        }
    }
    Ok(())
}
