//! Full player directory fetch.

use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_players_url;
use crate::config::Config;
use crate::constants::sleeper::SPORT;
use crate::data_fetcher::models::RawPlayer;
use crate::error::AppError;

/// Downloads the whole player directory (tens of thousands of entries, no
/// pagination) and converts each entry independently, so one malformed
/// player cannot fail the snapshot.
#[instrument(skip(client, config))]
pub async fn fetch_player_directory(
    client: &Client,
    config: &Config,
) -> Result<HashMap<String, RawPlayer>, AppError> {
    let url = build_players_url(&config.api_base_url(), SPORT)?;
    let entries = fetch::<HashMap<String, Value>>(client, &url).await?;

    let players: HashMap<String, RawPlayer> = entries
        .iter()
        .map(|(player_id, entry)| (player_id.clone(), RawPlayer::from_value(entry)))
        .collect();

    info!("Fetched player directory with {} players", players.len());
    Ok(players)
}
