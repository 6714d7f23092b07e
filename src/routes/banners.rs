use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AdminUser;
use crate::forms::banners::{AddBannerPayload, EditBannerPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_response, message_response};
use crate::services::banners::{
    BannersQuery, create_banner, get_banner, list_banners as load_banners, remove_banner,
    update_banner,
};
use crate::services::parse_record_id;

#[get("/banners")]
/// Full list, or the active feed for one placement when `?placement=` is given.
pub async fn list_banners(
    query: web::Query<BannersQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match load_banners(repo.get_ref(), query.into_inner()) {
        Ok(banners) => HttpResponse::Ok().json(banners),
        Err(err) => error_response(err, "list banners"),
    }
}

#[post("/banners")]
pub async fn add_banner(
    _admin: AdminUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<AddBannerPayload>,
) -> impl Responder {
    match create_banner(repo.get_ref(), payload.into_inner()) {
        Ok(banner) => {
            log::info!("Created banner {} for {}", banner.id, banner.placement);
            HttpResponse::Created().json(banner)
        }
        Err(err) => error_response(err, "create banner"),
    }
}

#[get("/banners/{id}")]
pub async fn show_banner(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let banner_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(err, "parse banner id"),
    };

    match get_banner(repo.get_ref(), banner_id) {
        Ok(banner) => HttpResponse::Ok().json(banner),
        Err(err) => error_response(err, &format!("get banner {banner_id}")),
    }
}

#[put("/banners/{id}")]
pub async fn edit_banner(
    _admin: AdminUser,
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<EditBannerPayload>,
) -> impl Responder {
    let banner_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(err, "parse banner id"),
    };

    match update_banner(repo.get_ref(), banner_id, payload.into_inner()) {
        Ok(banner) => HttpResponse::Ok().json(banner),
        Err(err) => error_response(err, &format!("update banner {banner_id}")),
    }
}

#[delete("/banners/{id}")]
pub async fn delete_banner(
    _admin: AdminUser,
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let banner_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(err, "parse banner id"),
    };

    match remove_banner(repo.get_ref(), banner_id) {
        Ok(()) => message_response("Banner deleted successfully"),
        Err(err) => error_response(err, &format!("delete banner {banner_id}")),
    }
}
