use diesel::prelude::*;

use crate::domain::banner::NewBanner as DomainNewBanner;
use crate::domain::category::NewCategory as DomainNewCategory;
use crate::domain::product::NewProduct as DomainNewProduct;
use crate::models::banner::NewBanner as DbNewBanner;
use crate::models::category::NewCategory as DbNewCategory;
use crate::models::product::NewProduct as DbNewProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CatalogWriter, DieselRepository};

impl CatalogWriter for DieselRepository {
    fn import_catalog(
        &self,
        categories: &[DomainNewCategory],
        banners: &[DomainNewBanner],
        products: &[DomainNewProduct],
    ) -> RepositoryResult<()> {
        use crate::schema::{banners, categories, products};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            for new_category in categories {
                diesel::insert_into(categories::table)
                    .values(&DbNewCategory::from(new_category))
                    .execute(conn)?;
            }

            for new_banner in banners {
                diesel::insert_into(banners::table)
                    .values(&DbNewBanner::from(new_banner))
                    .execute(conn)?;
            }

            for new_product in products {
                let insertable = DbNewProduct::try_from_domain(new_product)?;
                diesel::insert_into(products::table)
                    .values(&insertable)
                    .execute(conn)?;
            }

            Ok(())
        })
    }
}
