pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{get_league_rosters, get_user_leagues};
pub use cache::PlayerDirectoryCache;
pub use models::{LeagueBundle, ResolvedPlayer};
