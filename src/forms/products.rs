use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, ProductStatus, UpdateProduct};
use crate::forms::{FormError, FormResult, deserialize_some, non_blank};

pub const REQUIRED_PRODUCT_FIELDS: &str =
    "Name, description, category, price, originalPrice, imageUrl, and downloadUrl are required";

/// Body of `POST /products`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub original_price: Option<i64>,
    pub image_url: Option<String>,
    pub download_url: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub sales: Option<i64>,
    pub status: Option<ProductStatus>,
    pub badges: Option<Vec<String>>,
    pub screenshot_urls: Option<Vec<String>>,
    pub video_urls: Option<Vec<String>>,
}

impl AddProductPayload {
    /// Check required fields, trim text and build the insert payload.
    ///
    /// `price` and `originalPrice` count as missing when zero.
    pub fn into_new_product(self) -> FormResult<NewProduct> {
        self.validate()?;

        let (
            Some(name),
            Some(description),
            Some(category),
            Some(price),
            Some(original_price),
            Some(image_url),
            Some(download_url),
        ) = (
            non_blank(self.name),
            non_blank(self.description),
            non_blank(self.category),
            self.price.filter(|value| *value != 0),
            self.original_price.filter(|value| *value != 0),
            non_blank(self.image_url),
            non_blank(self.download_url),
        )
        else {
            return Err(FormError::MissingFields(REQUIRED_PRODUCT_FIELDS));
        };

        let mut product = NewProduct::new(
            name,
            description,
            category,
            price,
            original_price,
            image_url,
            download_url,
        )
        .with_sales(self.sales.unwrap_or(0))
        .with_status(self.status.unwrap_or_default());

        if let Some(badges) = self.badges {
            product = product.with_badges(badges);
        }
        if let Some(urls) = self.screenshot_urls {
            product = product.with_screenshot_urls(urls);
        }
        if let Some(urls) = self.video_urls {
            product = product.with_video_urls(urls);
        }

        Ok(product)
    }
}

/// Body of `PUT /products/{id}`. Every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub original_price: Option<i64>,
    pub image_url: Option<String>,
    pub download_url: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub sales: Option<i64>,
    pub status: Option<ProductStatus>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub badges: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub screenshot_urls: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub video_urls: Option<Option<Vec<String>>>,
}

impl EditProductPayload {
    /// Build a patch holding only the fields present in the body.
    pub fn into_update_product(self) -> FormResult<UpdateProduct> {
        self.validate()?;

        Ok(UpdateProduct {
            name: non_blank(self.name),
            description: non_blank(self.description),
            category: non_blank(self.category),
            price: self.price,
            original_price: self.original_price,
            image_url: non_blank(self.image_url),
            download_url: non_blank(self.download_url),
            sales: self.sales,
            status: self.status,
            badges: self.badges,
            screenshot_urls: self.screenshot_urls,
            video_urls: self.video_urls,
        })
    }
}
