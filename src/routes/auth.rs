use actix_identity::Identity;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::config::AdminCredentials;
use crate::domain::auth::AdminUser;
use crate::forms::auth::LoginPayload;
use crate::routes::{error_body, error_response, message_response};
use crate::services::ServiceError;
use crate::services::auth::{INVALID_CREDENTIALS_MESSAGE, authenticate};

#[post("/auth/login")]
pub async fn login(
    request: HttpRequest,
    admin: web::Data<AdminCredentials>,
    payload: web::Json<LoginPayload>,
) -> impl Responder {
    match authenticate(admin.get_ref(), payload.into_inner()) {
        Ok(username) => match Identity::login(&request.extensions(), username.clone()) {
            Ok(_) => {
                log::info!("Admin {username} logged in");
                HttpResponse::Ok().json(json!({ "username": username }))
            }
            Err(err) => error_response(
                ServiceError::Internal(err.to_string()),
                "start admin session",
            ),
        },
        Err(ServiceError::Unauthorized) => {
            log::warn!("Rejected admin login attempt");
            error_body(HttpResponse::Unauthorized(), INVALID_CREDENTIALS_MESSAGE)
        }
        Err(err) => error_response(err, "log in"),
    }
}

#[post("/auth/logout")]
pub async fn logout(admin: AdminUser, identity: Identity) -> impl Responder {
    identity.logout();
    log::info!("Admin {} logged out", admin.username);
    message_response("Logged out")
}

#[get("/auth/session")]
pub async fn session(admin: AdminUser) -> impl Responder {
    HttpResponse::Ok().json(admin)
}
