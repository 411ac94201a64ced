use clap::Parser;
use dynasty_analyzer::cli::Args;
use dynasty_analyzer::config::Config;
use dynasty_analyzer::data_fetcher::api::create_http_client_with_timeout;
use dynasty_analyzer::error::AppError;
use dynasty_analyzer::logging::setup_logging;
use dynasty_analyzer::server;
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // File, then environment, then flags; validated once at the end
    let config = args.effective_config(Config::load_unvalidated().await?)?;

    if args.list_config {
        config.display();
        return Ok(());
    }

    if args.save_config {
        config.save().await?;
        println!("Configuration saved to {}", Config::get_config_path());
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&config, args.debug).await?;
    info!(
        "Starting {} v{} (upstream: {}, log file: {})",
        dynasty_analyzer::NAME,
        dynasty_analyzer::VERSION,
        config.api_base_url(),
        log_file_path
    );

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    server::run(config, client).await
}
