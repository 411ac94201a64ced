use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::config::Config;
use crate::error::AppError;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Dynasty Analyzer API
///
/// Serves Sleeper league, roster and player data to the dynasty league
/// analyzer frontend. Values given here override the config file and the
/// DYNASTY_* environment variables.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Address to listen on, e.g. 0.0.0.0:8000
    #[arg(long = "bind", short = 'b', help_heading = "Server")]
    pub bind_address: Option<String>,

    /// Upstream Sleeper API base URL
    #[arg(long = "api-domain", help_heading = "Server")]
    pub api_domain: Option<String>,

    /// Browser origin allowed by CORS, e.g. http://localhost:3000
    #[arg(long = "allowed-origin", help_heading = "Server")]
    pub allowed_origin: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long = "http-timeout", help_heading = "Server")]
    pub http_timeout_seconds: Option<u64>,

    /// List current configuration settings and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// Enable debug level logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies command line overrides to a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(bind_address) = &self.bind_address {
            config.bind_address = bind_address.clone();
        }
        if let Some(api_domain) = &self.api_domain {
            config.api_domain = api_domain.clone();
        }
        if let Some(allowed_origin) = &self.allowed_origin {
            config.allowed_origin = allowed_origin.clone();
        }
        if let Some(timeout) = self.http_timeout_seconds {
            config.http_timeout_seconds = timeout;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }

    /// Layers these overrides on a file/env config and validates the result,
    /// so a flag can fix a bad environment value.
    pub fn effective_config(
        &self,
        mut config: Config,
    ) -> Result<Config, AppError> {
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }
}
