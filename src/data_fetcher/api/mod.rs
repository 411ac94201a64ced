pub mod urls;
pub mod http_client;
mod fetch_utils;
pub mod league_api;
pub mod player_api;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export lookup operations
pub use league_api::{fetch_user_id, get_league_rosters, get_user_leagues};
pub use player_api::fetch_player_directory;
