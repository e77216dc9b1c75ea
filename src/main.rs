use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use dotenv::dotenv;

mod api;
mod config;
mod errors;
mod models;
mod services;

use services::{balance_service::BalanceService, ledger::EthersLedger};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env();
    let ledger = EthersLedger::new(&config).expect("Failed to initialize the Ethereum provider");
    let service = web::Data::new(BalanceService::new(Arc::new(ledger)));

    log::info!("listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);
        App::new()
            .app_data(service.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
