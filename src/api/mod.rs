use actix_web::web;

mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::index)
        .service(handlers::get_balance)
        .default_service(web::route().to(handlers::not_found));
}
