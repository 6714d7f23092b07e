use crate::domain::product::ProductListQuery;
use crate::domain::stats::CatalogStats;
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Scans the whole product table and derives the dashboard counters.
pub fn load_stats<R>(repo: &R) -> ServiceResult<CatalogStats>
where
    R: ProductReader + ?Sized,
{
    let products = repo
        .list_products(ProductListQuery::new())
        .map_err(ServiceError::from)?;
    Ok(CatalogStats::from_products(&products))
}
