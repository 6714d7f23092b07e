use serde::Deserialize;

use crate::domain::image_url::to_direct_image_url;
use crate::domain::product::{Product, ProductListQuery, ProductSort};
use crate::forms::products::{AddProductPayload, EditProductPayload};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

const ENTITY: &str = "Product";

/// Category value that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

pub const MISSING_PRODUCT_KEY_MESSAGE: &str = "Product ID or slug is required";

/// Query parameters accepted by `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Exact category name; absent, empty or `all` lists every product.
    pub category: Option<String>,
    /// One of `newest`, `price-asc`, `price-desc`, `bestsellers`.
    pub sort: Option<String>,
}

/// Lists products, optionally filtered by category and sorted in memory.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let ProductsQuery { category, sort } = query;

    let mut list_query = ProductListQuery::new();
    if let Some(category) = category.filter(|value| !value.is_empty() && value != ALL_CATEGORIES)
    {
        list_query = list_query.category(category);
    }

    let mut products = repo
        .list_products(list_query)
        .map_err(ServiceError::from_repository(ENTITY))?;

    if let Some(sort) = sort.as_deref().and_then(ProductSort::from_token) {
        sort.apply(&mut products);
    }

    Ok(products)
}

/// Resolves a product by numeric id or, for any other key, by slug.
///
/// An all-digit key is always treated as an id, even when it overflows.
pub fn get_product<R>(repo: &R, id_or_slug: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    if id_or_slug.is_empty() {
        return Err(ServiceError::Validation(
            MISSING_PRODUCT_KEY_MESSAGE.to_string(),
        ));
    }

    let found = if id_or_slug.bytes().all(|byte| byte.is_ascii_digit()) {
        match id_or_slug.parse::<i32>() {
            Ok(id) => repo.get_product_by_id(id),
            Err(_) => Ok(None),
        }
    } else {
        repo.get_product_by_slug(id_or_slug)
    };

    found
        .map_err(ServiceError::from_repository(ENTITY))?
        .ok_or(ServiceError::NotFound(ENTITY))
}

/// Target of the download redirect.
pub fn product_download_url<R>(repo: &R, id_or_slug: &str) -> ServiceResult<String>
where
    R: ProductReader + ?Sized,
{
    get_product(repo, id_or_slug).map(|product| product.download_url)
}

/// Target of the image redirect, with share links rewritten to a direct form.
pub fn product_image_url<R>(repo: &R, id_or_slug: &str) -> ServiceResult<String>
where
    R: ProductReader + ?Sized,
{
    get_product(repo, id_or_slug).map(|product| to_direct_image_url(&product.image_url))
}

pub fn create_product<R>(repo: &R, payload: AddProductPayload) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = payload.into_new_product()?;
    repo.create_product(&new_product)
        .map_err(ServiceError::from_repository(ENTITY))
}

/// Applies a partial patch. Slug and creation time are never changed.
pub fn update_product<R>(
    repo: &R,
    product_id: i32,
    payload: EditProductPayload,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = payload.into_update_product()?;
    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from_repository(ENTITY))
}

/// Deletes a product. Missing ids are not an error.
pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let deleted = repo
        .delete_product(product_id)
        .map_err(ServiceError::from_repository(ENTITY))?;
    if deleted == 0 {
        log::debug!("Product {product_id} was already absent");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::product::{NewProduct, ProductStatus, UpdateProduct};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::{MockProductReader, MockProductWriter};

    fn sample_product(id: i32, name: &str, price: i64, sales: i64, day: u32) -> Product {
        Product {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: "A product".to_string(),
            category: "Reels Bundle".to_string(),
            price,
            original_price: price * 10,
            image_url: "https://drive.google.com/file/d/abc123/view".to_string(),
            download_url: "https://drive.google.com/sample1".to_string(),
            sales,
            status: ProductStatus::Active,
            badges: None,
            screenshot_urls: None,
            video_urls: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0).unwrap(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            sample_product(1, "Alpha", 199, 10, 1),
            sample_product(2, "Beta", 49, 30, 3),
            sample_product(3, "Gamma", 99, 20, 2),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|product| product.id).collect()
    }

    #[test]
    fn list_products_ignores_all_category_and_sorts() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .times(1)
            .withf(|query| query.category.is_none())
            .returning(|_| Ok(catalog()));

        let query = ProductsQuery {
            category: Some(ALL_CATEGORIES.to_string()),
            sort: Some("price-asc".to_string()),
        };
        let products = list_products(&repo, query).expect("expected success");

        assert_eq!(ids(&products), vec![2, 3, 1]);
    }

    #[test]
    fn list_products_pushes_category_filter_to_storage() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .times(1)
            .withf(|query| query.category.as_deref() == Some("E-books"))
            .returning(|_| Ok(Vec::new()));

        let query = ProductsQuery {
            category: Some("E-books".to_string()),
            sort: None,
        };

        assert!(list_products(&repo, query).unwrap().is_empty());
    }

    #[test]
    fn list_products_keeps_storage_order_for_unknown_sort() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products().returning(|_| Ok(catalog()));

        let query = ProductsQuery {
            category: Some(String::new()),
            sort: Some("popular".to_string()),
        };

        assert_eq!(ids(&list_products(&repo, query).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn list_products_surfaces_storage_failure() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .returning(|_| Err(RepositoryError::InvalidData("broken row".to_string())));

        let result = list_products(&repo, ProductsQuery::default());

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    #[test]
    fn get_product_uses_id_lookup_for_digits() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .times(1)
            .withf(|id| *id == 42)
            .returning(|_| Ok(None));
        repo.expect_get_product_by_slug().never();

        let result = get_product(&repo, "42");

        assert!(matches!(result, Err(ServiceError::NotFound("Product"))));
    }

    #[test]
    fn get_product_treats_overflowing_digits_as_missing() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id().never();
        repo.expect_get_product_by_slug().never();

        let result = get_product(&repo, "99999999999");

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn get_product_uses_slug_lookup_otherwise() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id().never();
        repo.expect_get_product_by_slug()
            .times(1)
            .withf(|slug| slug == "alpha")
            .returning(|_| Ok(Some(sample_product(1, "Alpha", 199, 10, 1))));

        let product = get_product(&repo, "alpha").expect("expected success");

        assert_eq!(product.id, 1);
    }

    #[test]
    fn get_product_rejects_empty_key() {
        let repo = MockProductReader::new();
        assert!(matches!(
            get_product(&repo, ""),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn image_url_is_normalized() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_slug()
            .returning(|_| Ok(Some(sample_product(1, "Alpha", 199, 10, 1))));

        let url = product_image_url(&repo, "alpha").unwrap();

        assert_eq!(url, "https://drive.google.com/thumbnail?id=abc123&sz=w1000");
        assert_eq!(
            product_download_url(&repo, "alpha").unwrap(),
            "https://drive.google.com/sample1"
        );
    }

    #[test]
    fn create_product_validates_before_writing() {
        let mut repo = MockProductWriter::new();
        repo.expect_create_product().never();

        let result = create_product(&repo, AddProductPayload::default());

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn create_product_persists_payload() {
        let mut repo = MockProductWriter::new();
        repo.expect_create_product()
            .times(1)
            .withf(|new_product: &NewProduct| {
                new_product.slug == "reels-bundle" && new_product.name == "Reels Bundle"
            })
            .returning(|_| Ok(sample_product(5, "Reels Bundle", 199, 0, 1)));

        let payload = AddProductPayload {
            name: Some(" Reels Bundle ".to_string()),
            description: Some("Reels".to_string()),
            category: Some("Reels Bundle".to_string()),
            price: Some(199),
            original_price: Some(1999),
            image_url: Some("https://example.com/a.png".to_string()),
            download_url: Some("https://example.com/a.zip".to_string()),
            ..Default::default()
        };

        assert_eq!(create_product(&repo, payload).unwrap().id, 5);
    }

    #[test]
    fn update_product_maps_missing_row_to_not_found() {
        let mut repo = MockProductWriter::new();
        repo.expect_update_product()
            .times(1)
            .withf(|id, updates: &UpdateProduct| *id == 999_999 && updates.price == Some(0))
            .returning(|_, _| Err(RepositoryError::NotFound));

        let payload = EditProductPayload {
            price: Some(0),
            ..Default::default()
        };
        let result = update_product(&repo, 999_999, payload);

        assert!(matches!(result, Err(ServiceError::NotFound("Product"))));
    }

    #[test]
    fn update_product_rejects_negative_sales() {
        let mut repo = MockProductWriter::new();
        repo.expect_update_product().never();

        let payload = EditProductPayload {
            sales: Some(-5),
            ..Default::default()
        };

        assert!(matches!(
            update_product(&repo, 1, payload),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn delete_product_is_idempotent() {
        let mut repo = MockProductWriter::new();
        repo.expect_delete_product()
            .times(1)
            .returning(|_| Ok(0));

        assert!(delete_product(&repo, 12345).is_ok());
    }
}
