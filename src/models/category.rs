use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::domain::timestamp;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    pub created_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub color: &'a str,
    pub created_at: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct UpdateCategory<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub color: Option<&'a str>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = RepositoryError;

    fn try_from(value: Category) -> Result<Self, Self::Error> {
        let created_at = timestamp::parse_iso8601(&value.created_at).map_err(|err| {
            RepositoryError::InvalidData(format!("category {} created_at: {err}", value.id))
        })?;

        Ok(Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            color: value.color,
            created_at,
        })
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(value: &'a DomainNewCategory) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_str(),
            color: value.color.as_str(),
            created_at: timestamp::format_iso8601(&value.created_at),
        }
    }
}

impl<'a> From<&'a DomainUpdateCategory> for UpdateCategory<'a> {
    fn from(value: &'a DomainUpdateCategory) -> Self {
        Self {
            name: value.name.as_deref(),
            description: value.description.as_deref(),
            color: value.color.as_deref(),
        }
    }
}
