pub mod league;
pub mod players;

pub use league::{LeagueBundle, SleeperUser};
pub use players::{RawPlayer, ResolvedPlayer};
