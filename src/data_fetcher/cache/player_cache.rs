//! Player directory cache with a 24 hour refresh policy
//!
//! The cache holds at most one [`DirectorySnapshot`]. Snapshots are shared as
//! `Arc`s and replaced wholesale, so a reader always works on one complete
//! directory. Refreshes run behind a gate and each finished attempt bumps a
//! counter. A caller that queued behind an attempt takes that attempt's
//! outcome, success or failure, instead of fetching again. While a refresh is
//! in flight, callers holding a stale snapshot are served it right away.

use chrono::{DateTime, Utc};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use super::types::{DirectoryInfo, DirectorySnapshot};
use crate::config::Config;
use crate::data_fetcher::api::fetch_player_directory;
use crate::data_fetcher::models::ResolvedPlayer;
use crate::data_fetcher::processors::resolve_player;
use crate::error::AppError;

/// Source of "now" for refresh decisions and age calculation
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct PlayerDirectoryCache {
    client: Client,
    config: Config,
    clock: Clock,
    snapshot: RwLock<Option<Arc<DirectorySnapshot>>>,
    refresh_gate: Mutex<()>,
    finished_attempts: AtomicU64,
}

impl PlayerDirectoryCache {
    /// Creates an empty cache using the system clock.
    pub fn new(client: Client, config: Config) -> Self {
        Self::with_clock(client, config, Arc::new(Utc::now))
    }

    /// Creates an empty cache with an injected clock.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use chrono::{TimeZone, Utc};
    /// use dynasty_analyzer::config::Config;
    /// use dynasty_analyzer::data_fetcher::cache::PlayerDirectoryCache;
    ///
    /// let pinned = Utc.with_ymd_and_hms(2025, 8, 17, 12, 0, 0).unwrap();
    /// let cache = PlayerDirectoryCache::with_clock(
    ///     reqwest::Client::new(),
    ///     Config::default(),
    ///     Arc::new(move || pinned),
    /// );
    /// # let _ = cache;
    /// ```
    pub fn with_clock(client: Client, config: Config, clock: Clock) -> Self {
        Self {
            client,
            config,
            clock,
            snapshot: RwLock::new(None),
            refresh_gate: Mutex::new(()),
            finished_attempts: AtomicU64::new(0),
        }
    }

    /// Resolves player ids to display records.
    ///
    /// Refreshes the directory first when it was never loaded or is at least
    /// 24 hours old. A failed refresh keeps whatever snapshot was there, and
    /// a stale snapshot is served as is while another caller refreshes.
    /// Ids missing from the directory are left out of the result; this never
    /// fails.
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn resolve_players(&self, ids: &[String]) -> HashMap<String, ResolvedPlayer> {
        let now = (self.clock)();

        let Some(snapshot) = self.current_snapshot(now).await else {
            debug!("Player directory unavailable, returning no players");
            return HashMap::new();
        };

        let today = now.date_naive();
        let resolved: HashMap<String, ResolvedPlayer> = ids
            .iter()
            .filter_map(|id| {
                snapshot
                    .players
                    .get(id)
                    .map(|raw| (id.clone(), resolve_player(raw, today)))
            })
            .collect();

        debug!(
            "Resolved {} of {} requested players",
            resolved.len(),
            ids.len()
        );
        resolved
    }

    /// Downloads a new directory and swaps it in. On failure the current
    /// snapshot is left untouched and the error is returned.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<DirectoryInfo, AppError> {
        let players = fetch_player_directory(&self.client, &self.config).await?;
        let snapshot = Arc::new(DirectorySnapshot::new(players, (self.clock)()));
        let info = snapshot.info();

        *self.snapshot.write().await = Some(snapshot);

        info!(
            "Player directory refreshed: player_count={}, refreshed_at={}",
            info.player_count, info.refreshed_at
        );
        Ok(info)
    }

    /// Size and age of the current snapshot, if any
    pub async fn snapshot_info(&self) -> Option<DirectoryInfo> {
        self.snapshot.read().await.as_ref().map(|s| s.info())
    }

    /// Drops the current snapshot so the next resolve fetches again
    pub async fn clear(&self) {
        *self.snapshot.write().await = None;
    }

    async fn current_snapshot(&self, now: DateTime<Utc>) -> Option<Arc<DirectorySnapshot>> {
        let attempts_seen = self.finished_attempts.load(Ordering::Acquire);

        let stale = {
            let current = self.snapshot.read().await;
            match current.as_ref() {
                Some(snapshot) if !snapshot.is_expired(now) => return Some(Arc::clone(snapshot)),
                other => other.cloned(),
            }
        };

        let _gate = match stale {
            Some(stale) => match self.refresh_gate.try_lock() {
                Ok(gate) => gate,
                Err(_) => {
                    debug!("Refresh in flight, serving stale player directory");
                    return Some(stale);
                }
            },
            None => self.refresh_gate.lock().await,
        };

        // An attempt finished while this caller waited; reuse its outcome
        if self.finished_attempts.load(Ordering::Acquire) != attempts_seen {
            return self.snapshot.read().await.clone();
        }

        if let Err(e) = self.refresh().await {
            warn!("Player directory refresh failed, keeping previous snapshot: {e}");
        }
        self.finished_attempts.fetch_add(1, Ordering::AcqRel);

        self.snapshot.read().await.clone()
    }
}
