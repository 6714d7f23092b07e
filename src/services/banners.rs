use serde::Deserialize;

use crate::domain::banner::{Banner, sort_for_display};
use crate::forms::banners::{AddBannerPayload, EditBannerPayload};
use crate::repository::{BannerReader, BannerWriter};
use crate::services::{ServiceError, ServiceResult};

const ENTITY: &str = "Banner";

/// Query parameters accepted by `GET /banners`.
#[derive(Debug, Default, Deserialize)]
pub struct BannersQuery {
    /// When set, return the display feed for this page region.
    pub placement: Option<String>,
}

/// Lists banners in storage order, or the active display feed for a placement.
pub fn list_banners<R>(repo: &R, query: BannersQuery) -> ServiceResult<Vec<Banner>>
where
    R: BannerReader + ?Sized,
{
    let mut banners = repo
        .list_banners()
        .map_err(ServiceError::from_repository(ENTITY))?;

    let placement = query
        .placement
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    if let Some(placement) = placement {
        banners.retain(|banner| banner.is_displayed_in(&placement));
        sort_for_display(&mut banners);
    }

    Ok(banners)
}

pub fn get_banner<R>(repo: &R, banner_id: i32) -> ServiceResult<Banner>
where
    R: BannerReader + ?Sized,
{
    repo.get_banner_by_id(banner_id)
        .map_err(ServiceError::from_repository(ENTITY))?
        .ok_or(ServiceError::NotFound(ENTITY))
}

pub fn create_banner<R>(repo: &R, payload: AddBannerPayload) -> ServiceResult<Banner>
where
    R: BannerWriter + ?Sized,
{
    let new_banner = payload.into_new_banner()?;
    repo.create_banner(&new_banner)
        .map_err(ServiceError::from_repository(ENTITY))
}

pub fn update_banner<R>(
    repo: &R,
    banner_id: i32,
    payload: EditBannerPayload,
) -> ServiceResult<Banner>
where
    R: BannerWriter + ?Sized,
{
    let updates = payload.into_update_banner();
    repo.update_banner(banner_id, &updates)
        .map_err(ServiceError::from_repository(ENTITY))
}

pub fn remove_banner<R>(repo: &R, banner_id: i32) -> ServiceResult<()>
where
    R: BannerWriter + ?Sized,
{
    repo.delete_banner(banner_id)
        .map_err(ServiceError::from_repository(ENTITY))?;
    Ok(())
}
