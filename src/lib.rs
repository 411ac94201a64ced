//! Dynasty Analyzer backend library
//!
//! Relays Sleeper fantasy-football data to the dynasty league analyzer
//! frontend: username → leagues, league → info plus rosters, and player ids
//! → display records backed by a daily-refreshed player directory cache.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dynasty_analyzer::config::Config;
//! use dynasty_analyzer::data_fetcher::api::{create_http_client_with_timeout, get_user_leagues};
//! use dynasty_analyzer::data_fetcher::cache::PlayerDirectoryCache;
//! use dynasty_analyzer::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let leagues = get_user_leagues(&client, &config, "some_username").await?;
//!     println!("{} leagues", leagues.len());
//!
//!     let players = PlayerDirectoryCache::new(client, config);
//!     let resolved = players.resolve_players(&["6794".to_string()]).await;
//!     for (id, player) in resolved {
//!         println!("{id}: {} ({:?})", player.name, player.age);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::cache::PlayerDirectoryCache;
pub use data_fetcher::models::{LeagueBundle, RawPlayer, ResolvedPlayer};
pub use data_fetcher::{get_league_rosters, get_user_leagues};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
