//! HTTP surface consumed by the frontend.
//!
//! Handlers only translate between HTTP and the lookup/cache operations:
//! unknown users and leagues become `404 {"detail": ...}`, other upstream
//! failures become `502`. The frontend calls from a browser, so every route
//! sits behind CORS for the configured origin.

use actix_cors::Cors;
use actix_web::web::{self, Data, Json, Path};
use actix_web::{App, HttpResponse, HttpServer, Responder};
use reqwest::Client;
use serde_json::json;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::data_fetcher::api::{get_league_rosters, get_user_leagues};
use crate::data_fetcher::cache::PlayerDirectoryCache;
use crate::error::AppError;

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health))
        .route("/leagues/user/{username}", web::get().to(user_leagues))
        .route("/leagues/{league_id}/rosters", web::get().to(league_rosters))
        .route("/players", web::post().to(resolve_players));
}

/// CORS policy for the frontend origin: any method and header, credentials
/// allowed.
pub fn cors(config: &Config) -> Cors {
    Cors::default()
        .allowed_origin(&config.allowed_origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

/// Builds the shared state and serves until shutdown.
pub async fn run(config: Config, client: Client) -> Result<(), AppError> {
    let bind_address = config.bind_address.clone();
    let players = Data::new(PlayerDirectoryCache::new(client.clone(), config.clone()));
    let config = Data::new(config);
    let client = Data::new(client);

    info!(
        "Listening on {bind_address}, allowing origin {}",
        config.allowed_origin
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&config))
            .app_data(config.clone())
            .app_data(client.clone())
            .app_data(players.clone())
            .configure(configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}

fn detail(message: &str) -> serde_json::Value {
    json!({ "detail": message })
}

/// Maps a lookup error to the client-facing response.
pub fn error_response(err: &AppError) -> HttpResponse {
    match err {
        AppError::UserNotFound { .. } => HttpResponse::NotFound().json(detail("User not found")),
        AppError::LeagueNotFound { .. } => {
            HttpResponse::NotFound().json(detail("League not found"))
        }
        e if e.is_upstream_failure() => {
            warn!("Upstream failure: {e}");
            HttpResponse::BadGateway().json(detail("Upstream request failed"))
        }
        e => {
            error!("Request failed: {e}");
            HttpResponse::InternalServerError().json(detail("Internal server error"))
        }
    }
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Welcome to Dynasty Analyzer API" }))
}

async fn health(players: Data<PlayerDirectoryCache>) -> impl Responder {
    let directory = players.snapshot_info().await;
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "player_directory": directory,
    }))
}

async fn user_leagues(
    username: Path<String>,
    client: Data<Client>,
    config: Data<Config>,
) -> HttpResponse {
    match get_user_leagues(&client, &config, &username).await {
        Ok(leagues) => HttpResponse::Ok().json(leagues),
        Err(e) => error_response(&e),
    }
}

async fn league_rosters(
    league_id: Path<String>,
    client: Data<Client>,
    config: Data<Config>,
) -> HttpResponse {
    match get_league_rosters(&client, &config, &league_id).await {
        Ok(bundle) => HttpResponse::Ok().json(bundle),
        Err(e) => error_response(&e),
    }
}

async fn resolve_players(
    player_ids: Json<Vec<String>>,
    players: Data<PlayerDirectoryCache>,
) -> HttpResponse {
    let resolved = players.resolve_players(&player_ids).await;
    HttpResponse::Ok().json(resolved)
}
