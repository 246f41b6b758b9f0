use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use phone_ranker::config::Settings;
use phone_ranker::core::{check_weights, Ranker};
use phone_ranker::routes::{self, handle_json_payload_error, rankings::AppState};
use phone_ranker::services::Catalog;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting phone ranker service...");

    let default_weights = settings.default_weights();
    if let Err(e) = check_weights(&default_weights) {
        error!("Invalid default weights: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
    if default_weights.total() != 100 {
        tracing::warn!("Default weights sum to {}, not 100", default_weights.total());
    }

    let catalog = match Catalog::load(settings.catalog.path.as_deref()).await {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    info!(
        "Catalog loaded: {} phones from {}",
        catalog.len(),
        settings.catalog.path.as_deref().unwrap_or("bundled seed")
    );

    let ranker = Ranker::new(default_weights);

    info!("Ranker initialized with weights: {:?}", ranker.default_weights());

    // Build application state
    let app_state = AppState {
        catalog,
        ranker,
        ranking: settings.ranking.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
