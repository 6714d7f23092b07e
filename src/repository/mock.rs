use mockall::mock;

use super::{
    BannerReader, BannerWriter, CatalogWriter, CategoryReader, CategoryWriter, ProductReader,
    ProductWriter,
};
use crate::domain::{
    banner::{Banner, NewBanner, UpdateBanner},
    category::{Category, NewCategory, UpdateCategory},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub BannerReader {}

    impl BannerReader for BannerReader {
        fn get_banner_by_id(&self, id: i32) -> RepositoryResult<Option<Banner>>;
        fn list_banners(&self) -> RepositoryResult<Vec<Banner>>;
    }
}

mock! {
    pub BannerWriter {}

    impl BannerWriter for BannerWriter {
        fn create_banner(&self, new_banner: &NewBanner) -> RepositoryResult<Banner>;
        fn update_banner(&self, banner_id: i32, updates: &UpdateBanner) -> RepositoryResult<Banner>;
        fn delete_banner(&self, banner_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub CatalogWriter {}

    impl CatalogWriter for CatalogWriter {
        fn import_catalog(
            &self,
            categories: &[NewCategory],
            banners: &[NewBanner],
            products: &[NewProduct],
        ) -> RepositoryResult<()>;
    }
}
