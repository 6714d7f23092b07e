use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AdminUser;
use crate::forms::products::{AddProductPayload, EditProductPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_response, message_response, redirect_to};
use crate::services::parse_record_id;
use crate::services::products::{
    self as products_service, ProductsQuery, product_download_url, product_image_url,
};

#[get("/products")]
pub async fn list_products(
    query: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::list_products(repo.get_ref(), query.into_inner()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, "list products"),
    }
}

#[post("/products")]
pub async fn add_product(
    _admin: AdminUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<AddProductPayload>,
) -> impl Responder {
    match products_service::create_product(repo.get_ref(), payload.into_inner()) {
        Ok(product) => {
            log::info!("Created product {} ({})", product.id, product.slug);
            HttpResponse::Created().json(product)
        }
        Err(err) => error_response(err, "create product"),
    }
}

#[get("/products/{id_or_slug}")]
/// Numeric keys are looked up by id, anything else by slug.
pub async fn show_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let key = path.into_inner();

    match products_service::get_product(repo.get_ref(), &key) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, &format!("get product {key}")),
    }
}

#[get("/products/{id_or_slug}/download")]
pub async fn download_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let key = path.into_inner();

    match product_download_url(repo.get_ref(), &key) {
        Ok(url) => redirect_to(&url),
        Err(err) => error_response(err, &format!("resolve download for product {key}")),
    }
}

#[get("/products/{id_or_slug}/image")]
pub async fn product_image(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let key = path.into_inner();

    match product_image_url(repo.get_ref(), &key) {
        Ok(url) => redirect_to(&url),
        Err(err) => error_response(err, &format!("resolve image for product {key}")),
    }
}

#[put("/products/{id}")]
pub async fn edit_product(
    _admin: AdminUser,
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<EditProductPayload>,
) -> impl Responder {
    let product_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(err, "parse product id"),
    };

    match products_service::update_product(repo.get_ref(), product_id, payload.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, &format!("update product {product_id}")),
    }
}

#[delete("/products/{id}")]
pub async fn delete_product(
    _admin: AdminUser,
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(err, "parse product id"),
    };

    match products_service::delete_product(repo.get_ref(), product_id) {
        Ok(()) => message_response("Product deleted successfully"),
        Err(err) => error_response(err, &format!("delete product {product_id}")),
    }
}
