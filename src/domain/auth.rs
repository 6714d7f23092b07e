use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Message returned when an administrative request carries no valid session.
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";

/// Administrator resolved from the signed session cookie.
///
/// Extracting it from a request without a live session fails with
/// `401 Unauthorized` and a JSON error body, so handlers that take an
/// `AdminUser` argument are admin-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub username: String,
}

impl FromRequest for AdminUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let username = req
            .get_identity()
            .ok()
            .and_then(|identity| identity.id().ok());

        ready(match username {
            Some(username) => Ok(AdminUser { username }),
            None => Err(InternalError::from_response(
                AUTH_REQUIRED_MESSAGE,
                HttpResponse::Unauthorized().json(json!({ "error": AUTH_REQUIRED_MESSAGE })),
            )
            .into()),
        })
    }
}
