//! OctoFit CLI
//!
//! Terminal dashboard for the OctoFit Tracker API:
//! - List users, teams, activities and workouts
//! - Show the leaderboard
//! - Generate a config file

use clap::{Parser, Subcommand};
use octofit::config::{generate_default_config, Config};
use octofit::models::{Activity, LeaderboardEntry, Resource, Team, User, Workout};
use octofit::render::{render_state, OutputFormat, Tabular};
use octofit::{ResourceFetcher, ResourceView};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OctoFit Tracker dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users
    Users,
    /// List teams and their members
    Teams,
    /// List logged activities
    Activities,
    /// List suggested workouts
    Workouts,
    /// Show the leaderboard
    Leaderboard,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    octofit::logging::init(&config.logging);

    let base_url = cli.api_url.clone().unwrap_or(config.api.base_url);
    let fetcher = ResourceFetcher::new(base_url);

    let ok = match cli.command {
        Commands::Users => show::<User>(&fetcher, cli.format).await,
        Commands::Teams => show::<Team>(&fetcher, cli.format).await,
        Commands::Activities => show::<Activity>(&fetcher, cli.format).await,
        Commands::Workouts => show::<Workout>(&fetcher, cli.format).await,
        Commands::Leaderboard => show::<LeaderboardEntry>(&fetcher, cli.format).await,
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Activate one view, wait for it to settle and print it
async fn show<R>(fetcher: &ResourceFetcher, format: OutputFormat) -> bool
where
    R: Resource + Tabular + Serialize + Clone,
{
    let view = ResourceView::<R>::new();

    let Some(state) = view.load(fetcher).await else {
        eprintln!("{} view was closed before its data arrived", R::TITLE);
        return false;
    };

    match render_state(&state, format) {
        Ok(text) => {
            print!("{}", text);
            true
        }
        Err(panel) => {
            eprint!("{}", panel);
            eprintln!("Endpoint: {}", fetcher.endpoint::<R>());
            false
        }
    }
}
