use std::io::Write;
use std::sync::Arc;

use bellboard_core::bell::SystemClock;
use bellboard_core::dashboard::run as run_dashboard;
use bellboard_core::{DashboardEvent, RunIntervals, StudentStore, TimeSource};
use clap::Args;
use tokio::sync::watch;

use crate::render::{status_line, Report};

#[derive(Args)]
pub struct WatchArgs {
    /// Schedule variant to use instead of the configured one
    #[arg(long)]
    variant: Option<String>,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let clock: Arc<dyn TimeSource> = Arc::new(SystemClock);
    let (dashboard, config) = super::open_dashboard(args.variant, clock.now())?;
    let student = StudentStore::open()?.load();
    let intervals = RunIntervals::from(&config.dashboard);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = shutdown_tx.send(true);
            }
        });

        let render_clock = clock.clone();
        run_dashboard(dashboard, clock, intervals, shutdown_rx, move |dashboard, events| {
            let now = render_clock.now();
            for event in events {
                if let DashboardEvent::VariantChanged { to, .. } = event {
                    println!("\nswitched to {to}");
                }
            }
            let line = status_line(&Report::new(dashboard, &student, now));
            let mut stdout = std::io::stdout().lock();
            let _ = write!(stdout, "\r\x1b[2K{line}");
            let _ = stdout.flush();
        })
        .await;
    });

    println!();
    Ok(())
}
