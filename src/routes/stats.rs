use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::auth::AdminUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::stats::load_stats;

#[get("/stats")]
pub async fn show_stats(_admin: AdminUser, repo: web::Data<DieselRepository>) -> impl Responder {
    match load_stats(repo.get_ref()) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => error_response(err, "load stats"),
    }
}
