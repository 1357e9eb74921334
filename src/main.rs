use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use alumni_portal_backend::{
    db::postgres::create_pool, graceful_shutdown::shutdown_signal, middlewares::auth::AuthMiddleware,
    routes::configure_routes, settings::AppConfig, AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let app_state = web::Data::new(AppState::new(&config, pool));

    let server_addr = format!("{}:{}", config.host, config.port);
    let cors_origins = config.cors_origins();

    tracing::info!(
        "Starting Alumni Portal API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        let cors = cors_origins.iter().fold(
            if cors_origins.iter().any(|o| o == "*") {
                Cors::default().allow_any_origin()
            } else {
                Cors::default()
            },
            |cors, origin| {
                if origin == "*" {
                    cors
                } else {
                    cors.allowed_origin(origin)
                }
            },
        )
        .allow_any_method()
        .allow_any_header();

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(AuthMiddleware)
            .wrap(cors)
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
