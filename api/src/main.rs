use actix_web::{middleware::DefaultHeaders, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use morph_api::{app, bootstrap, middleware};
use morph_shared::config::{AppConfig, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    tracing::info!(environment = ?config.environment, "Starting AI Morph API server");

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid configuration")?;

    let infrastructure = bootstrap::build_infrastructure(&config)
        .await
        .context("failed to initialize infrastructure")?;
    let database = infrastructure.database;
    tracing::info!(pool = %database.get_statistics(), "Infrastructure ready");
    let state = app::AppState::new(infrastructure.dependencies, &config);

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, workers = config.server.workers, "Server will bind");

    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(middleware::create_cors(&cors_config))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| app::configure_routes(cfg, &state))
            .default_service(web::route().to(app::not_found))
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
