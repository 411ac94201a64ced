//! League lookup: username → leagues, league id → league info plus rosters.
//!
//! Both operations are straight translations of upstream calls. Only the
//! primary lookup distinguishes "not found" from other failures; a failure of
//! the follow-up call is reported as not found as well, with the real cause
//! kept in the logs.

use reqwest::Client;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::{
    build_league_rosters_url, build_league_url, build_user_leagues_url, build_user_url,
};
use crate::config::Config;
use crate::constants::sleeper::{LEAGUE_SEASON, SPORT};
use crate::data_fetcher::models::{LeagueBundle, SleeperUser};
use crate::error::AppError;

/// Resolves a username to its user id.
///
/// Upstream answers unknown users with 404 or with a `null` body; both become
/// [`AppError::UserNotFound`]. Other failures propagate unchanged.
#[instrument(skip(client, config))]
pub async fn fetch_user_id(
    client: &Client,
    config: &Config,
    username: &str,
) -> Result<String, AppError> {
    let url = build_user_url(&config.api_base_url(), username)?;

    let user = match fetch::<Option<SleeperUser>>(client, &url).await {
        Ok(user) => user,
        Err(AppError::ApiNotFound { .. }) => return Err(AppError::user_not_found(username)),
        Err(e) => return Err(e),
    };

    user.and_then(|user| user.user_id)
        .ok_or_else(|| AppError::user_not_found(username))
}

/// Returns every league the user belongs to for the configured sport and
/// season, exactly as upstream lists them.
///
/// # Errors
/// * `AppError::UserNotFound` - unknown username, or the leagues call failed
/// * any other `AppError` - the username lookup itself failed
#[instrument(skip(client, config))]
pub async fn get_user_leagues(
    client: &Client,
    config: &Config,
    username: &str,
) -> Result<Vec<Value>, AppError> {
    let user_id = fetch_user_id(client, config, username).await?;

    let url = build_user_leagues_url(&config.api_base_url(), &user_id, SPORT, LEAGUE_SEASON)?;
    match fetch::<Vec<Value>>(client, &url).await {
        Ok(leagues) => {
            info!(
                "Found {} leagues for user {} (user_id={})",
                leagues.len(),
                username,
                user_id
            );
            Ok(leagues)
        }
        Err(e) => {
            warn!(
                "Leagues fetch failed for user {} (user_id={}), reporting as not found: {}",
                username, user_id, e
            );
            Err(AppError::user_not_found(username))
        }
    }
}

/// Fetches league info and rosters and combines them into a [`LeagueBundle`].
///
/// # Errors
/// * `AppError::LeagueNotFound` - unknown league, or the rosters call failed
/// * any other `AppError` - the league info call itself failed
#[instrument(skip(client, config))]
pub async fn get_league_rosters(
    client: &Client,
    config: &Config,
    league_id: &str,
) -> Result<LeagueBundle, AppError> {
    let api_base = config.api_base_url();

    let league_url = build_league_url(&api_base, league_id)?;
    let league_info = match fetch::<Value>(client, &league_url).await {
        Ok(Value::Null) | Err(AppError::ApiNotFound { .. }) => {
            return Err(AppError::league_not_found(league_id));
        }
        Ok(info) => info,
        Err(e) => return Err(e),
    };

    let rosters_url = build_league_rosters_url(&api_base, league_id)?;
    let rosters = match fetch::<Vec<Value>>(client, &rosters_url).await {
        Ok(rosters) => rosters,
        Err(e) => {
            warn!(
                "Rosters fetch failed for league {}, reporting as not found: {}",
                league_id, e
            );
            return Err(AppError::league_not_found(league_id));
        }
    };

    info!("Fetched league {} with {} rosters", league_id, rosters.len());

    Ok(LeagueBundle {
        league_info,
        rosters,
    })
}
