//! Application-wide constants and configuration values
//!
//! Upstream endpoints, timeouts and cache lifetimes live here so the
//! fetchers, the cache and the config layer agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Base URL of the public Sleeper API
pub const DEFAULT_API_DOMAIN: &str = "https://api.sleeper.app/v1";

/// Address the HTTP server listens on when nothing else is configured
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Browser origin of the analyzer frontend allowed by CORS
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// File name used for the rolling log file
pub const LOG_FILE_NAME: &str = "dynasty_analyzer.log";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "dynasty_analyzer";

/// Sleeper API request parameters
pub mod sleeper {
    /// Sport segment used for league and player lookups
    pub const SPORT: &str = "nfl";

    /// Season used for league lookups. Only one season is served per build.
    pub const LEAGUE_SEASON: &str = "2025";
}

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for the full player directory (24 hours)
    pub const PLAYER_DIRECTORY_SECONDS: i64 = 86400;
}

/// Environment variable names
pub mod env_vars {
    /// Override the upstream API base URL
    pub const API_DOMAIN: &str = "DYNASTY_API_DOMAIN";

    /// Override the server bind address
    pub const BIND_ADDRESS: &str = "DYNASTY_BIND_ADDRESS";

    /// Override the CORS allowed origin
    pub const ALLOWED_ORIGIN: &str = "DYNASTY_ALLOWED_ORIGIN";

    /// Override the log file path
    pub const LOG_FILE: &str = "DYNASTY_LOG_FILE";

    /// Override the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "DYNASTY_HTTP_TIMEOUT";
}
