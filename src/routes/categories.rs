use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AdminUser;
use crate::forms::categories::{AddCategoryPayload, EditCategoryPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_response, message_response};
use crate::services::categories::{
    create_category, get_category, list_categories as load_categories, remove_category,
    update_category,
};
use crate::services::parse_record_id;

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match load_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err, "list categories"),
    }
}

#[post("/categories")]
pub async fn add_category(
    _admin: AdminUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<AddCategoryPayload>,
) -> impl Responder {
    match create_category(repo.get_ref(), payload.into_inner()) {
        Ok(category) => {
            log::info!("Created category {} ({})", category.id, category.slug);
            HttpResponse::Created().json(category)
        }
        Err(err) => error_response(err, "create category"),
    }
}

#[get("/categories/{id}")]
pub async fn show_category(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(err, "parse category id"),
    };

    match get_category(repo.get_ref(), category_id) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, &format!("get category {category_id}")),
    }
}

#[put("/categories/{id}")]
pub async fn edit_category(
    _admin: AdminUser,
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<EditCategoryPayload>,
) -> impl Responder {
    let category_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(err, "parse category id"),
    };

    match update_category(repo.get_ref(), category_id, payload.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, &format!("update category {category_id}")),
    }
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    _admin: AdminUser,
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(err, "parse category id"),
    };

    match remove_category(repo.get_ref(), category_id) {
        Ok(()) => message_response("Category deleted successfully"),
        Err(err) => error_response(err, &format!("delete category {category_id}")),
    }
}
