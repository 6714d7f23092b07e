use crate::db::{DbConnection, DbPool};
use crate::domain::banner::{Banner, NewBanner, UpdateBanner};
use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::repository::errors::RepositoryResult;

pub mod banner;
pub mod catalog;
pub mod category;
pub mod errors;
pub mod product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
    /// Products matching `query` in ascending id order.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Fails with `RepositoryError::NotFound` when no row has `product_id`.
    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product>;
    /// Returns the number of deleted rows; deleting a missing id is not an error.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over banner records.
pub trait BannerReader {
    fn get_banner_by_id(&self, id: i32) -> RepositoryResult<Option<Banner>>;
    fn list_banners(&self) -> RepositoryResult<Vec<Banner>>;
}

/// Write operations over banner records.
pub trait BannerWriter {
    fn create_banner(&self, new_banner: &NewBanner) -> RepositoryResult<Banner>;
    fn update_banner(&self, banner_id: i32, updates: &UpdateBanner) -> RepositoryResult<Banner>;
    fn delete_banner(&self, banner_id: i32) -> RepositoryResult<usize>;
}

/// Bulk import of a whole catalog.
pub trait CatalogWriter {
    /// Inserts every record in one transaction. Nothing is stored when any
    /// insert fails.
    fn import_catalog(
        &self,
        categories: &[NewCategory],
        banners: &[NewBanner],
        products: &[NewProduct],
    ) -> RepositoryResult<()>;
}
