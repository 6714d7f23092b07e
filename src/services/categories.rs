use crate::domain::category::Category;
use crate::forms::categories::{AddCategoryPayload, EditCategoryPayload};
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

const ENTITY: &str = "Category";

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories()
        .map_err(ServiceError::from_repository(ENTITY))
}

pub fn get_category<R>(repo: &R, category_id: i32) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from_repository(ENTITY))?
        .ok_or(ServiceError::NotFound(ENTITY))
}

/// Creates a category. A duplicate name or slug surfaces as a storage error.
pub fn create_category<R>(repo: &R, payload: AddCategoryPayload) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = payload.into_new_category()?;
    repo.create_category(&new_category)
        .map_err(ServiceError::from_repository(ENTITY))
}

pub fn update_category<R>(
    repo: &R,
    category_id: i32,
    payload: EditCategoryPayload,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let updates = payload.into_update_category();
    repo.update_category(category_id, &updates)
        .map_err(ServiceError::from_repository(ENTITY))
}

/// Deletes a category without touching products that reference its name.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id)
        .map_err(ServiceError::from_repository(ENTITY))?;
    Ok(())
}
