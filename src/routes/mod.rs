//! HTTP handlers and the mapping from [`ServiceError`] to JSON responses.

use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod auth;
pub mod banners;
pub mod categories;
pub mod health;
pub mod products;
pub mod stats;

/// Register every route: `/health` at the root and the catalog under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health).service(
        web::scope("/api")
            .app_data(json_config())
            .service(auth::login)
            .service(auth::logout)
            .service(auth::session)
            .service(products::list_products)
            .service(products::add_product)
            .service(products::download_product)
            .service(products::product_image)
            .service(products::show_product)
            .service(products::edit_product)
            .service(products::delete_product)
            .service(categories::list_categories)
            .service(categories::add_category)
            .service(categories::show_category)
            .service(categories::edit_category)
            .service(categories::delete_category)
            .service(banners::list_banners)
            .service(banners::add_banner)
            .service(banners::show_banner)
            .service(banners::edit_banner)
            .service(banners::delete_banner)
            .service(stats::show_stats),
    );
}

/// Reject unparsable JSON bodies with `400` and a JSON error message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}

/// JSON error body `{"error": message}` with the given status builder.
pub(crate) fn error_body(mut builder: actix_web::HttpResponseBuilder, message: &str) -> HttpResponse {
    builder.json(json!({ "error": message }))
}

/// Convert a service failure into its response, logging storage errors.
///
/// `action` completes the log line "Failed to {action}".
pub(crate) fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => error_body(HttpResponse::BadRequest(), &message),
        ServiceError::NotFound(entity) => {
            error_body(HttpResponse::NotFound(), &format!("{entity} not found"))
        }
        ServiceError::Unauthorized => error_body(
            HttpResponse::Unauthorized(),
            crate::domain::auth::AUTH_REQUIRED_MESSAGE,
        ),
        ServiceError::Internal(detail) => {
            log::error!("Failed to {action}: {detail}");
            error_body(
                HttpResponse::InternalServerError(),
                &format!("Internal server error: {detail}"),
            )
        }
    }
}

pub(crate) fn message_response(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": message }))
}

pub(crate) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
