use actix_web::{middleware, web, App, HttpServer};
use backend::config::Config;
use backend::services;
use backend::store::Store;
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let store = Store::open(&config.database)
        .map_err(|e| io::Error::other(format!("cannot open {}: {}", config.database, e)))?;
    let store = web::Data::new(store);
    let shared_config = web::Data::new(config.clone());

    info!(
        "Server running at http://{}:{} (database: {})",
        config.host, config.port, config.database
    );

    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(services::json_config(json_limit))
            .app_data(store.clone())
            .app_data(shared_config.clone())
            .configure(services::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
