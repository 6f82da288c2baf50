use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use compass_core::SearchKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod context;
mod output;
mod presenter;

#[derive(Parser)]
#[command(name = "compass", version, about = "Career Compass CLI")]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the data files, taking precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Catalog JSON file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Question tree file (.toml or .json)
    #[arg(long, global = true)]
    pub tree: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the interest quiz and get recommendations
    Quiz(commands::quiz::QuizArgs),
    /// Show the roadmap for a course or career
    Roadmap {
        /// Course or career label (e.g. "B.Tech")
        label: String,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// List institutions offering a course matching the label
    Institutions {
        /// Course label (e.g. "CSE", "B.Arch.")
        label: String,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Search institutions, courses, or careers
    Search {
        /// Text to look for
        query: String,
        /// What to search: institution, course, or career
        #[arg(long, short, default_value = "course")]
        kind: SearchKind,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Show announcements shipped with the catalog
    Notifications,
    /// Greeting and affirmation of the day
    Greet {
        /// Display name (defaults to $COMPASS_USER)
        #[arg(long)]
        name: Option<String>,
    },
    /// About Career Compass
    About,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let data = cli.data;
    let result = match cli.command {
        Commands::Quiz(args) => commands::quiz::run(&data, args),
        Commands::Roadmap { label, json } => commands::lookup::roadmap(&data, &label, json),
        Commands::Institutions { label, json } => {
            commands::lookup::institutions(&data, &label, json)
        }
        Commands::Search { query, kind, json } => {
            commands::lookup::search(&data, &query, kind, json)
        }
        Commands::Notifications => commands::lookup::notifications(&data),
        Commands::Greet { name } => commands::greet::greet(name),
        Commands::About => commands::greet::about(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
