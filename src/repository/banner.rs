use diesel::prelude::*;

use crate::domain::banner::{
    Banner as DomainBanner, NewBanner as DomainNewBanner, UpdateBanner as DomainUpdateBanner,
};
use crate::models::banner::{
    Banner as DbBanner, NewBanner as DbNewBanner, UpdateBanner as DbUpdateBanner,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BannerReader, BannerWriter, DieselRepository};

impl BannerReader for DieselRepository {
    fn get_banner_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBanner>> {
        use crate::schema::banners;

        let mut conn = self.conn()?;
        let banner = banners::table
            .filter(banners::id.eq(id))
            .first::<DbBanner>(&mut conn)
            .optional()?;

        banner.map(DomainBanner::try_from).transpose()
    }

    fn list_banners(&self) -> RepositoryResult<Vec<DomainBanner>> {
        use crate::schema::banners;

        let mut conn = self.conn()?;
        let rows = banners::table
            .order(banners::id.asc())
            .load::<DbBanner>(&mut conn)?;

        rows.into_iter().map(DomainBanner::try_from).collect()
    }
}

impl BannerWriter for DieselRepository {
    fn create_banner(&self, new_banner: &DomainNewBanner) -> RepositoryResult<DomainBanner> {
        use crate::schema::banners;

        let mut conn = self.conn()?;
        let insertable = DbNewBanner::from(new_banner);

        let created = diesel::insert_into(banners::table)
            .values(&insertable)
            .get_result::<DbBanner>(&mut conn)?;

        created.try_into()
    }

    fn update_banner(
        &self,
        banner_id: i32,
        updates: &DomainUpdateBanner,
    ) -> RepositoryResult<DomainBanner> {
        use crate::schema::banners;

        let mut conn = self.conn()?;
        let target = banners::table.filter(banners::id.eq(banner_id));

        let row = if updates.is_empty() {
            target.first::<DbBanner>(&mut conn)?
        } else {
            diesel::update(target)
                .set(&DbUpdateBanner::from(updates))
                .get_result::<DbBanner>(&mut conn)?
        };

        row.try_into()
    }

    fn delete_banner(&self, banner_id: i32) -> RepositoryResult<usize> {
        use crate::schema::banners;

        let mut conn = self.conn()?;

        diesel::delete(banners::table.filter(banners::id.eq(banner_id)))
            .execute(&mut conn)
            .map_err(RepositoryError::from)
    }
}
