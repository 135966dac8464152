use actix_web::{web, App, HttpServer};
use courier_auth::config::{EnvConfig, CONFIG};
use courier_auth::db::postgres_service::PostgresService;
use courier_auth::routes::configure_routes;
use courier_auth::utils::token::TokenIssuer;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let _ = CONFIG.set(config.clone());
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    // Expired blacklist rows are dead weight; sweep them once per boot.
    match postgres_service.purge_expired_tokens().await {
        Ok(purged) => println!("Purged {} expired tokens from the blacklist", purged),
        Err(e) => eprintln!("Blacklist purge failed: {}", e),
    }

    let token_issuer = web::Data::new(TokenIssuer::new(&config.jwt));

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(token_issuer.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
