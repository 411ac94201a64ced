pub mod types;
pub mod player_cache;

// Re-export cache types
pub use types::*;
// Re-export the player directory cache
pub use player_cache::*;
