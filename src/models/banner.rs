use diesel::prelude::*;

use crate::domain::banner::{
    Banner as DomainBanner, NewBanner as DomainNewBanner, UpdateBanner as DomainUpdateBanner,
};
use crate::domain::timestamp;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::banners)]
pub struct Banner {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub placement: String,
    pub priority: i32,
    pub status: String,
    pub color: String,
    pub created_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::banners)]
pub struct NewBanner<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub cta_text: &'a str,
    pub cta_link: &'a str,
    pub placement: &'a str,
    pub priority: i32,
    pub status: &'a str,
    pub color: &'a str,
    pub created_at: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::banners)]
pub struct UpdateBanner<'a> {
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
    pub cta_text: Option<&'a str>,
    pub cta_link: Option<&'a str>,
    pub placement: Option<&'a str>,
    pub priority: Option<i32>,
    pub status: Option<&'a str>,
    pub color: Option<&'a str>,
}

impl TryFrom<Banner> for DomainBanner {
    type Error = RepositoryError;

    fn try_from(value: Banner) -> Result<Self, Self::Error> {
        let created_at = timestamp::parse_iso8601(&value.created_at).map_err(|err| {
            RepositoryError::InvalidData(format!("banner {} created_at: {err}", value.id))
        })?;

        Ok(Self {
            id: value.id,
            title: value.title,
            subtitle: value.subtitle,
            cta_text: value.cta_text,
            cta_link: value.cta_link,
            placement: value.placement,
            priority: value.priority,
            status: value.status,
            color: value.color,
            created_at,
        })
    }
}

impl<'a> From<&'a DomainNewBanner> for NewBanner<'a> {
    fn from(value: &'a DomainNewBanner) -> Self {
        Self {
            title: value.title.as_str(),
            subtitle: value.subtitle.as_str(),
            cta_text: value.cta_text.as_str(),
            cta_link: value.cta_link.as_str(),
            placement: value.placement.as_str(),
            priority: value.priority,
            status: value.status.as_str(),
            color: value.color.as_str(),
            created_at: timestamp::format_iso8601(&value.created_at),
        }
    }
}

impl<'a> From<&'a DomainUpdateBanner> for UpdateBanner<'a> {
    fn from(value: &'a DomainUpdateBanner) -> Self {
        Self {
            title: value.title.as_deref(),
            subtitle: value.subtitle.as_deref(),
            cta_text: value.cta_text.as_deref(),
            cta_link: value.cta_link.as_deref(),
            placement: value.placement.as_deref(),
            priority: value.priority,
            status: value.status.as_deref(),
            color: value.color.as_deref(),
        }
    }
}
