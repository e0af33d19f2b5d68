//! # OctoFit
//!
//! Data layer of the OctoFit Tracker dashboard: fetches fitness-tracking
//! collections (users, teams, activities, workouts, leaderboard) from the
//! OctoFit API and hands each view a single three-state result.
//!
//! ## Modules
//!
//! - [`client`]: Resource fetcher over HTTP
//! - [`normalize`]: Repairs inconsistent response shapes
//! - [`models`]: Record schemas per resource
//! - [`view`]: Loading/Error/Ready state per view activation
//! - [`server`]: Read-only demo API with seeded data
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::models::Team;
//! use octofit::{FetchResult, ResourceFetcher, ResourceView};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = ResourceFetcher::new("http://localhost:8000/api");
//!     let teams = ResourceView::<Team>::new();
//!
//!     match teams.load(&fetcher).await {
//!         Some(FetchResult::Ready { items }) => println!("{} teams", items.len()),
//!         Some(FetchResult::Error { message }) => eprintln!("{}", message),
//!         _ => {}
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod render;
pub mod server;
pub mod view;

pub use client::{endpoint_url, FetchError, Fetched, HttpTransport, ResourceFetcher, Transport};

pub use models::{
    Activity, LeaderboardEntry, RecordId, Resource, ResourceKind, Team, User, Workout,
};

pub use normalize::{decode_records, extract_collection, normalize, repair_sequence_fields};

pub use view::{Activation, FetchResult, ResourceView};

pub use config::{Config, ConfigError, LoggingConfig};

pub use server::{build_router, Fixtures, ServerConfig, ServerError};
