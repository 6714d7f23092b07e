use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductStatus,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::timestamp;
use crate::repository::errors::{RepositoryError, RepositoryResult};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub price: i64,
    pub original_price: i64,
    pub image_url: String,
    pub download_url: String,
    pub sales: i64,
    pub status: String,
    pub badges: Option<String>,
    pub screenshot_urls: Option<String>,
    pub video_urls: Option<String>,
    pub created_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub price: i64,
    pub original_price: i64,
    pub image_url: &'a str,
    pub download_url: &'a str,
    pub sales: i64,
    pub status: &'a str,
    pub badges: Option<String>,
    pub screenshot_urls: Option<String>,
    pub video_urls: Option<String>,
    pub created_at: String,
}

/// Changeset where `None` skips a column and `Some(None)` writes NULL.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub image_url: Option<&'a str>,
    pub download_url: Option<&'a str>,
    pub sales: Option<i64>,
    pub status: Option<&'a str>,
    pub badges: Option<Option<String>>,
    pub screenshot_urls: Option<Option<String>>,
    pub video_urls: Option<Option<String>>,
}

impl TryFrom<Product> for DomainProduct {
    type Error = RepositoryError;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        let id = value.id;
        let invalid = |field: &str, err: String| {
            RepositoryError::InvalidData(format!("product {id} {field}: {err}"))
        };

        let status = value
            .status
            .parse::<ProductStatus>()
            .map_err(|err| invalid("status", err))?;
        let created_at = timestamp::parse_iso8601(&value.created_at)
            .map_err(|err| invalid("created_at", err.to_string()))?;
        let badges = decode_list(value.badges.as_deref()).map_err(|err| invalid("badges", err))?;
        let screenshot_urls = decode_list(value.screenshot_urls.as_deref())
            .map_err(|err| invalid("screenshot_urls", err))?;
        let video_urls =
            decode_list(value.video_urls.as_deref()).map_err(|err| invalid("video_urls", err))?;

        Ok(Self {
            id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            category: value.category,
            price: value.price,
            original_price: value.original_price,
            image_url: value.image_url,
            download_url: value.download_url,
            sales: value.sales,
            status,
            badges,
            screenshot_urls,
            video_urls,
            created_at,
        })
    }
}

impl<'a> NewProduct<'a> {
    pub fn try_from_domain(value: &'a DomainNewProduct) -> RepositoryResult<Self> {
        Ok(Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_str(),
            category: value.category.as_str(),
            price: value.price,
            original_price: value.original_price,
            image_url: value.image_url.as_str(),
            download_url: value.download_url.as_str(),
            sales: value.sales,
            status: value.status.as_str(),
            badges: encode_list(value.badges.as_deref())?,
            screenshot_urls: encode_list(value.screenshot_urls.as_deref())?,
            video_urls: encode_list(value.video_urls.as_deref())?,
            created_at: timestamp::format_iso8601(&value.created_at),
        })
    }
}

impl<'a> UpdateProduct<'a> {
    pub fn try_from_domain(value: &'a DomainUpdateProduct) -> RepositoryResult<Self> {
        Ok(Self {
            name: value.name.as_deref(),
            description: value.description.as_deref(),
            category: value.category.as_deref(),
            price: value.price,
            original_price: value.original_price,
            image_url: value.image_url.as_deref(),
            download_url: value.download_url.as_deref(),
            sales: value.sales,
            status: value.status.as_ref().map(ProductStatus::as_str),
            badges: encode_patch(value.badges.as_ref())?,
            screenshot_urls: encode_patch(value.screenshot_urls.as_ref())?,
            video_urls: encode_patch(value.video_urls.as_ref())?,
        })
    }
}

fn decode_list(raw: Option<&str>) -> Result<Option<Vec<String>>, String> {
    match raw {
        None => Ok(None),
        Some(text) => serde_json::from_str(text).map_err(|err| err.to_string()),
    }
}

fn encode_list(list: Option<&[String]>) -> RepositoryResult<Option<String>> {
    list.map(serde_json::to_string)
        .transpose()
        .map_err(|err| RepositoryError::InvalidData(err.to_string()))
}

fn encode_patch(patch: Option<&Option<Vec<String>>>) -> RepositoryResult<Option<Option<String>>> {
    patch
        .map(|list| encode_list(list.as_deref()))
        .transpose()
}
