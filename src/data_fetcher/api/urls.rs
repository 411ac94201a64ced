//! URL building utilities for Sleeper API endpoints
//!
//! Client-supplied identifiers end up as path segments, so every builder goes
//! through [`build_url`] which percent-encodes each segment.

use reqwest::Url;

use crate::error::AppError;

/// Appends path segments to the API base URL, percent-encoding each one.
///
/// # Example
/// ```
/// use dynasty_analyzer::data_fetcher::api::build_url;
///
/// let url = build_url("https://api.example.com/v1", &["user", "some name"]).unwrap();
/// assert_eq!(url, "https://api.example.com/v1/user/some%20name");
/// ```
pub fn build_url(api_base: &str, segments: &[&str]) -> Result<String, AppError> {
    let mut url = Url::parse(api_base)
        .map_err(|e| AppError::config_error(format!("Invalid API domain '{api_base}': {e}")))?;

    url.path_segments_mut()
        .map_err(|_| {
            AppError::config_error(format!("API domain '{api_base}' cannot be used as a base URL"))
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url.to_string())
}

/// Builds the user lookup URL.
///
/// # Example
/// ```
/// use dynasty_analyzer::data_fetcher::api::build_user_url;
///
/// let url = build_user_url("https://api.example.com/v1", "testuser").unwrap();
/// assert_eq!(url, "https://api.example.com/v1/user/testuser");
/// ```
pub fn build_user_url(api_base: &str, username: &str) -> Result<String, AppError> {
    build_url(api_base, &["user", username])
}

/// Builds the URL listing a user's leagues for one sport and season.
///
/// # Example
/// ```
/// use dynasty_analyzer::data_fetcher::api::build_user_leagues_url;
///
/// let url = build_user_leagues_url("https://api.example.com/v1", "42", "nfl", "2025").unwrap();
/// assert_eq!(url, "https://api.example.com/v1/user/42/leagues/nfl/2025");
/// ```
pub fn build_user_leagues_url(
    api_base: &str,
    user_id: &str,
    sport: &str,
    season: &str,
) -> Result<String, AppError> {
    build_url(api_base, &["user", user_id, "leagues", sport, season])
}

/// Builds the league info URL.
pub fn build_league_url(api_base: &str, league_id: &str) -> Result<String, AppError> {
    build_url(api_base, &["league", league_id])
}

/// Builds the league rosters URL.
pub fn build_league_rosters_url(api_base: &str, league_id: &str) -> Result<String, AppError> {
    build_url(api_base, &["league", league_id, "rosters"])
}

/// Builds the full player directory URL for a sport.
///
/// # Example
/// ```
/// use dynasty_analyzer::data_fetcher::api::build_players_url;
///
/// let url = build_players_url("https://api.example.com/v1", "nfl").unwrap();
/// assert_eq!(url, "https://api.example.com/v1/players/nfl");
/// ```
pub fn build_players_url(api_base: &str, sport: &str) -> Result<String, AppError> {
    build_url(api_base, &["players", sport])
}
