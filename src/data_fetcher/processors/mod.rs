pub mod player_details;

// Re-export player detail derivation
pub use player_details::{
    age_on, calculate_age, coerce_epoch_millis, format_player_name, resolve_player,
};
