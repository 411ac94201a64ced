use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User object returned by `GET /user/{username}`.
///
/// Only `user_id` is needed; the rest of the payload is ignored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SleeperUser {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// League metadata plus every roster of that league, assembled from two
/// upstream calls. Both parts are forwarded exactly as received.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LeagueBundle {
    pub league_info: Value,
    pub rosters: Vec<Value>,
}
