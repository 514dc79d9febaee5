use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "bellboard", version, about = "Bellboard school schedule dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current period once
    Now(commands::now::NowArgs),
    /// Live dashboard, refreshed every tick until Ctrl-C
    Watch(commands::watch::WatchArgs),
    /// Bell schedule variants
    Variants {
        #[command(subcommand)]
        action: commands::variants::VariantsAction,
    },
    /// Personal class and room schedule
    My {
        #[command(subcommand)]
        action: commands::my::MyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr so stdout stays parseable. Level comes from `BELLBOARD_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("BELLBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Now(args) => commands::now::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Variants { action } => commands::variants::run(action),
        Commands::My { action } => commands::my::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
