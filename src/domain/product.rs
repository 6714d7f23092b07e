use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::slug::derive_slug;
use crate::domain::timestamp;

/// Publication state of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Listed in the public catalog.
    #[default]
    Active,
    /// Hidden work in progress.
    Draft,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(ProductStatus::Active),
            "draft" => Ok(ProductStatus::Draft),
            other => Err(format!("unknown product status `{other}`")),
        }
    }
}

/// Digital product offered in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// URL-safe identifier derived from the name at creation.
    pub slug: String,
    /// Long-form description shown on the product page.
    pub description: String,
    /// Name of the category the product is listed under.
    pub category: String,
    /// Selling price in whole currency units.
    pub price: i64,
    /// Price before discount, shown struck through.
    pub original_price: i64,
    /// Cover image location.
    pub image_url: String,
    /// Externally hosted file the buyer is redirected to.
    pub download_url: String,
    /// Sales counter maintained by the admin.
    pub sales: i64,
    /// Publication state.
    pub status: ProductStatus,
    /// Optional display labels such as "New" or "Bestseller".
    pub badges: Option<Vec<String>>,
    /// Optional gallery images.
    pub screenshot_urls: Option<Vec<String>>,
    /// Optional preview videos.
    pub video_urls: Option<Vec<String>>,
    /// Creation time, never changed afterwards.
    #[serde(with = "timestamp::iso8601")]
    pub created_at: DateTime<Utc>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub price: i64,
    pub original_price: i64,
    pub image_url: String,
    pub download_url: String,
    pub sales: i64,
    pub status: ProductStatus,
    pub badges: Option<Vec<String>>,
    pub screenshot_urls: Option<Vec<String>>,
    pub video_urls: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    /// Build an active product with zero sales, deriving the slug from `name`
    /// and stamping the current time.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: i64,
        original_price: i64,
        image_url: impl Into<String>,
        download_url: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            slug: derive_slug(&name),
            name,
            description: description.into(),
            category: category.into(),
            price,
            original_price,
            image_url: image_url.into(),
            download_url: download_url.into(),
            sales: 0,
            status: ProductStatus::Active,
            badges: None,
            screenshot_urls: None,
            video_urls: None,
            created_at: timestamp::now(),
        }
    }

    pub fn with_sales(mut self, sales: i64) -> Self {
        self.sales = sales;
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_badges(mut self, badges: Vec<String>) -> Self {
        self.badges = Some(badges);
        self
    }

    pub fn with_screenshot_urls(mut self, urls: Vec<String>) -> Self {
        self.screenshot_urls = Some(urls);
        self
    }

    pub fn with_video_urls(mut self, urls: Vec<String>) -> Self {
        self.video_urls = Some(urls);
        self
    }

    /// Override the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Partial patch applied to an existing product.
///
/// `None` leaves the column untouched. For the list columns the inner
/// `Option` distinguishes "set to null" from "set to this list".
/// Slug and creation time cannot be patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub image_url: Option<String>,
    pub download_url: Option<String>,
    pub sales: Option<i64>,
    pub status: Option<ProductStatus>,
    pub badges: Option<Option<Vec<String>>>,
    pub screenshot_urls: Option<Option<Vec<String>>>,
    pub video_urls: Option<Option<Vec<String>>>,
}

impl UpdateProduct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn sales(mut self, sales: i64) -> Self {
        self.sales = Some(sales);
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replace the badges, `None` clears them.
    pub fn badges(mut self, badges: Option<Vec<String>>) -> Self {
        self.badges = Some(badges);
        self
    }

    /// Whether the patch would leave the row unchanged.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.original_price.is_none()
            && self.image_url.is_none()
            && self.download_url.is_none()
            && self.sales.is_none()
            && self.status.is_none()
            && self.badges.is_none()
            && self.screenshot_urls.is_none()
            && self.video_urls.is_none()
    }
}

/// Storage-side filter for listing products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    /// Exact, case-sensitive category name.
    pub category: Option<String>,
}

impl ProductListQuery {
    /// Construct a query that targets every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only products whose category equals `category`.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// In-memory ordering applied to a fetched product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Most recently created first.
    Newest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Highest sales counter first.
    Bestsellers,
}

impl ProductSort {
    /// Parse a `sort` query token; unknown tokens mean "keep storage order".
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "newest" => Some(ProductSort::Newest),
            "price-asc" => Some(ProductSort::PriceAsc),
            "price-desc" => Some(ProductSort::PriceDesc),
            "bestsellers" => Some(ProductSort::Bestsellers),
            _ => None,
        }
    }

    /// Stable sort, so equal keys keep their storage order.
    pub fn apply(&self, products: &mut [Product]) {
        match self {
            ProductSort::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ProductSort::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
            ProductSort::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            ProductSort::Bestsellers => products.sort_by(|a, b| b.sales.cmp(&a.sales)),
        }
    }
}
