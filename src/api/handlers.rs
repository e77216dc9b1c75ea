use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    errors::ApiError,
    models::api_response::{BalanceResponse, Greeting},
    services::balance_service::BalanceService,
};

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(Greeting {
        message: "Hello from AWS Lambda!".to_string(),
    })
}

#[get("/address/balance/{address}")]
pub async fn get_balance(
    address: web::Path<String>,
    service: web::Data<BalanceService>,
) -> Result<HttpResponse, ApiError> {
    let balance = service.ether_balance(&address).await?;

    Ok(HttpResponse::Ok().json(BalanceResponse { balance }))
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}
