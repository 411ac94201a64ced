use crate::error::AppError;
use std::net::SocketAddr;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must look like a URL or domain name
/// - Bind address must parse as `host:port`
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(
    api_domain: &str,
    bind_address: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if bind_address.parse::<SocketAddr>().is_err() {
        return Err(AppError::config_error(format!(
            "Bind address '{bind_address}' is not a valid host:port pair"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// The CORS origin must be a bare `scheme://host[:port]`, as browsers send it
/// in the `Origin` header.
pub fn validate_allowed_origin(allowed_origin: &str) -> Result<(), AppError> {
    let Some((scheme, host)) = allowed_origin.split_once("://") else {
        return Err(AppError::config_error(format!(
            "Allowed origin '{allowed_origin}' must include a scheme"
        )));
    };

    if !matches!(scheme, "http" | "https") || host.is_empty() || host.contains('/') {
        return Err(AppError::config_error(format!(
            "Allowed origin '{allowed_origin}' must look like http(s)://host[:port]"
        )));
    }

    Ok(())
}
