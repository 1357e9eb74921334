use actix_web::{post, web, HttpResponse};

use crate::{entities::admin::AdminCredentials, errors::AppError, AppState};

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<AdminCredentials>,
) -> Result<HttpResponse, actix_web::Error> {
    let response = state.auth_handler.login(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<AdminCredentials>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_handler.signup(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}
