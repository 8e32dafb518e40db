use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use bot::config::GameConfig;
use bot::domain::WordList;
use bot::outbound::{LogOutbound, RawIdNames};
use bot::routes;
use bot::state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: via docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (e.g. set -a; . ./.env; set +a)
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ PORT must be a valid port number");
            std::process::exit(1);
        });

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let words = match WordList::load(&config.words_file) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("❌ Failed to read word list: {e}");
            std::process::exit(1);
        }
    };

    println!("🎭 Starting Imposter bot on http://{}:{}", host, port);

    // The chat gateway adapter plugs in here; without one, announcements go
    // to the log and only the liveness endpoint is served.
    let app_state = AppState::new(config, words, Arc::new(LogOutbound), Arc::new(RawIdNames));
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
