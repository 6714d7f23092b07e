use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        category.map(DomainCategory::try_from).transpose()
    }

    fn list_categories(&self) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        categories
            .into_iter()
            .map(DomainCategory::try_from)
            .collect()
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        created.try_into()
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let target = categories::table.filter(categories::id.eq(category_id));

        let row = if updates.is_empty() {
            target.first::<DbCategory>(&mut conn)?
        } else {
            diesel::update(target)
                .set(&DbUpdateCategory::from(updates))
                .get_result::<DbCategory>(&mut conn)?
        };

        row.try_into()
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        diesel::delete(categories::table.filter(categories::id.eq(category_id)))
            .execute(&mut conn)
            .map_err(RepositoryError::from)
    }
}
