use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sleeper request failed: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Upstream answered with a non-success status
    #[error("Sleeper returned 404 for {url}")]
    ApiNotFound { url: String },

    #[error("Sleeper server error {status} ({message}) for {url}")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Sleeper rejected request with {status} ({message}) for {url}")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Sleeper rate limit hit ({message}) for {url}")]
    ApiRateLimit { message: String, url: String },

    #[error("Sleeper unavailable, status {status} ({message}) for {url}")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Transport failures
    #[error("Timed out waiting for {url}")]
    NetworkTimeout { url: String },

    #[error("Could not connect to {url}: {message}")]
    NetworkConnection { url: String, message: String },

    // Body could not be decoded
    #[error("Body from {url} is not JSON: {message}")]
    ApiMalformedJson { message: String, url: String },

    #[error("Body from {url} has an unexpected shape: {message}")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Body from {url} is empty: {message}")]
    ApiNoData { message: String, url: String },

    // Lookup results surfaced to clients as "not found"
    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("League not found: {league_id}")]
    LeagueNotFound { league_id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not write config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Could not read config: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Could not set up logging: {0}")]
    LogSetup(String),
}

impl AppError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// 5xx other than 502 and 503
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// 4xx other than 404 and 429
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// 502 and 503
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Body is JSON but does not match the expected type
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    pub fn league_not_found(league_id: impl Into<String>) -> Self {
        Self::LeagueNotFound {
            league_id: league_id.into(),
        }
    }

    /// Whether the error came from talking to Sleeper rather than from local
    /// setup. These are reported to clients as a bad gateway.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("bind address missing");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(error.to_string(), "Invalid configuration: bind address missing");
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://api.example.com/user/nobody");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "Sleeper returned 404 for https://api.example.com/user/nobody"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal server error", "https://api.example.com");
        assert!(matches!(error, AppError::ApiServerError { .. }));
        assert_eq!(
            error.to_string(),
            "Sleeper server error 500 (Internal server error) for https://api.example.com"
        );
    }

    #[test]
    fn test_api_rate_limit_helper() {
        let error = AppError::api_rate_limit("Too many requests", "https://api.example.com");
        assert_eq!(
            error.to_string(),
            "Sleeper rate limit hit (Too many requests) for https://api.example.com"
        );
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = AppError::network_timeout("https://api.example.com");
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert_eq!(
            error.to_string(),
            "Timed out waiting for https://api.example.com"
        );
    }

    #[test]
    fn test_user_not_found_helper() {
        let error = AppError::user_not_found("nonexistentuser");
        assert!(matches!(error, AppError::UserNotFound { .. }));
        assert_eq!(error.to_string(), "User not found: nonexistentuser");
    }

    #[test]
    fn test_league_not_found_helper() {
        let error = AppError::league_not_found("123456");
        assert_eq!(error.to_string(), "League not found: 123456");
    }

    #[test]
    fn test_is_upstream_failure() {
        assert!(AppError::network_timeout("url").is_upstream_failure());
        assert!(AppError::api_service_unavailable(503, "down", "url").is_upstream_failure());
        assert!(!AppError::config_error("bad").is_upstream_failure());
        assert!(!AppError::user_not_found("x").is_upstream_failure());
        assert!(!AppError::league_not_found("1").is_upstream_failure());
    }
}
