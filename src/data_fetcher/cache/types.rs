//! Cache data structures with TTL support

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::constants::cache_ttl;
use crate::data_fetcher::models::RawPlayer;

/// One complete player directory download and the time it finished.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    pub players: HashMap<String, RawPlayer>,
    pub refreshed_at: DateTime<Utc>,
}

impl DirectorySnapshot {
    /// Creates a new snapshot stamped with `refreshed_at`
    pub fn new(players: HashMap<String, RawPlayer>, refreshed_at: DateTime<Utc>) -> Self {
        Self {
            players,
            refreshed_at,
        }
    }

    /// Gets the TTL duration for a directory snapshot
    pub fn get_ttl() -> Duration {
        Duration::seconds(cache_ttl::PLAYER_DIRECTORY_SECONDS)
    }

    /// Checks if the snapshot is at least one TTL old at `now`.
    /// A clock that moved backwards keeps the snapshot fresh.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let age = now - self.refreshed_at;
        let is_expired = age >= Self::get_ttl();

        debug!(
            "Player directory expiration check: age={}s, ttl={}s, is_expired={}",
            age.num_seconds(),
            cache_ttl::PLAYER_DIRECTORY_SECONDS,
            is_expired
        );

        is_expired
    }

    /// Summary used for health reporting
    pub fn info(&self) -> DirectoryInfo {
        DirectoryInfo {
            player_count: self.players.len(),
            refreshed_at: self.refreshed_at,
        }
    }
}

/// Size and age of the current player directory snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectoryInfo {
    pub player_count: usize,
    pub refreshed_at: DateTime<Utc>,
}
