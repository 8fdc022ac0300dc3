mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod pagination;
mod repositories;
mod routes;
mod services;
#[cfg(test)]
mod testing;
mod utils;
mod validators;

use actix_web::{middleware::Logger, App, HttpServer};
use log::{error, info};
use mongodb::bson::doc;
use mongodb::Client;

use crate::config::{Config, StorageBackend};
use crate::middleware::AuthMiddleware;
use crate::services::Services;

async fn connect_mongodb(config: &Config) -> Result<Services, Box<dyn std::error::Error>> {
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let db = client.database(&config.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB successfully!");

    Ok(Services::mongodb(&db).await?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    let services = match config.storage {
        StorageBackend::MongoDb => connect_mongodb(&config).await.map_err(|e| {
            error!("Failed to initialise MongoDB storage: {}", e);
            std::io::Error::other(e.to_string())
        })?,
        StorageBackend::Memory => Services::in_memory(),
    };
    let auth = AuthMiddleware::new(&config.jwt_secret);

    // Start HTTP server
    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors_headers())
            .wrap(Logger::default())
            .configure(|cfg| routes::configure_routes(cfg, &services, &auth))
    })
    .bind(&server_addr)?
    .run()
    .await
}
