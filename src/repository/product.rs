use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
    UpdateProduct as DomainUpdateProduct,
};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(DomainProduct::try_from).transpose()
    }

    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::slug.eq(slug))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(DomainProduct::try_from).transpose()
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = query.category.as_ref() {
            items = items.filter(products::category.eq(category));
        }

        let db_products = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        db_products
            .into_iter()
            .map(DomainProduct::try_from)
            .collect()
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::try_from_domain(new_product)?;

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        created.try_into()
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let target = products::table.filter(products::id.eq(product_id));

        // An empty changeset is rejected by diesel, so a no-op patch is a read.
        let row = if updates.is_empty() {
            target.first::<DbProduct>(&mut conn)?
        } else {
            let db_updates = DbUpdateProduct::try_from_domain(updates)?;
            diesel::update(target)
                .set(&db_updates)
                .get_result::<DbProduct>(&mut conn)?
        };

        row.try_into()
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let target = products::table.filter(products::id.eq(product_id));

        diesel::delete(target)
            .execute(&mut conn)
            .map_err(RepositoryError::from)
    }
}
