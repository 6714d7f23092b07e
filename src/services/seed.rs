//! Sample catalog used to bootstrap an empty database.

use crate::domain::product::ProductStatus;
use crate::forms::FormResult;
use crate::forms::banners::AddBannerPayload;
use crate::forms::categories::AddCategoryPayload;
use crate::forms::products::AddProductPayload;
use crate::repository::{CatalogWriter, CategoryReader};
use crate::services::{ServiceError, ServiceResult};

/// Number of records inserted by [`seed_catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub banners: usize,
    pub products: usize,
}

const CATEGORIES: &[(&str, &str, &str)] = &[
    (
        "Reels Bundle",
        "Professional Instagram Reels templates",
        "from-orange-500 to-red-500",
    ),
    (
        "YouTube Thumbnails",
        "Eye-catching thumbnail designs",
        "from-purple-500 to-pink-500",
    ),
    (
        "Notion Templates",
        "Productivity templates for Notion",
        "from-blue-500 to-cyan-500",
    ),
    ("E-books", "Digital books and guides", "from-green-500 to-emerald-500"),
    (
        "Graphics Bundle",
        "Complete graphics packages",
        "from-yellow-500 to-orange-500",
    ),
];

struct BannerSeed {
    title: &'static str,
    subtitle: &'static str,
    cta_text: &'static str,
    cta_link: &'static str,
    placement: &'static str,
    color: &'static str,
}

const BANNERS: &[BannerSeed] = &[
    BannerSeed {
        title: "LIMITED TIME: 90% OFF ALL BUNDLES!",
        subtitle: "Get instant access to 2000+ premium digital products",
        cta_text: "Get Instant Access",
        cta_link: "/dashboard",
        placement: "hero",
        color: "from-orange-500 via-red-500 to-purple-600",
    },
    BannerSeed {
        title: "NEW ARRIVALS - Fresh Content Weekly",
        subtitle: "Discover the latest digital products added to our collection",
        cta_text: "Browse New Products",
        cta_link: "/dashboard?sort=newest",
        placement: "dashboard",
        color: "from-blue-500 via-purple-500 to-pink-500",
    },
];

struct ProductSeed {
    name: &'static str,
    category: &'static str,
    price: i64,
    original_price: i64,
    photo: &'static str,
    download: &'static str,
    sales: i64,
    badges: &'static [&'static str],
    description: &'static str,
    screenshots: &'static [&'static str],
    videos: &'static [&'static str],
}

const DEMO_VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        name: "2000+ Free Fire Gameplay Reels Bundle",
        category: "Reels Bundle",
        price: 199,
        original_price: 1999,
        photo: "photo-1614294148960-9aa740632a87",
        download: "https://drive.google.com/sample1",
        sales: 1250,
        badges: &["Bestseller", "New"],
        description: "Complete bundle of 2000+ professional Free Fire gameplay reels ready to post",
        screenshots: &[
            "photo-1614294148960-9aa740632a87",
            "photo-1542751371-adc38448a05e",
        ],
        videos: &[DEMO_VIDEO],
    },
    ProductSeed {
        name: "YouTube Gaming Thumbnails Pack",
        category: "YouTube Thumbnails",
        price: 149,
        original_price: 999,
        photo: "photo-1611162616305-c69b3fa7fbe0",
        download: "https://drive.google.com/sample2",
        sales: 980,
        badges: &["Bestseller"],
        description: "500+ gaming thumbnail templates for YouTube videos",
        screenshots: &["photo-1611162616305-c69b3fa7fbe0"],
        videos: &[],
    },
    ProductSeed {
        name: "Complete Notion Productivity Bundle",
        category: "Notion Templates",
        price: 99,
        original_price: 799,
        photo: "photo-1484480974693-6ca0a78fb36b",
        download: "https://drive.google.com/sample3",
        sales: 750,
        badges: &["New"],
        description: "50+ Notion templates for productivity and organization",
        screenshots: &[
            "photo-1484480974693-6ca0a78fb36b",
            "photo-1454165804606-c3d57bc86b40",
            "photo-1586281380349-632531db7ed4",
        ],
        videos: &[],
    },
    ProductSeed {
        name: "Social Media Growth E-book",
        category: "E-books",
        price: 49,
        original_price: 299,
        photo: "photo-1544716278-ca5e3f4abd8c",
        download: "https://drive.google.com/sample4",
        sales: 450,
        badges: &[],
        description: "Complete guide to growing your social media presence in 2024",
        screenshots: &["photo-1544716278-ca5e3f4abd8c"],
        videos: &[],
    },
    ProductSeed {
        name: "Instagram Reels Starter Pack",
        category: "Reels Bundle",
        price: 79,
        original_price: 599,
        photo: "photo-1611162617474-5b21e879e113",
        download: "https://drive.google.com/sample5",
        sales: 620,
        badges: &["New"],
        description: "300+ Instagram Reels templates for content creators",
        screenshots: &[
            "photo-1611162617474-5b21e879e113",
            "photo-1611162618071-b39a2ec055fb",
        ],
        videos: &[DEMO_VIDEO],
    },
    ProductSeed {
        name: "Ultimate Graphics Bundle 2024",
        category: "Graphics Bundle",
        price: 299,
        original_price: 2999,
        photo: "photo-1561070791-2526d30994b5",
        download: "https://drive.google.com/sample6",
        sales: 880,
        badges: &["Bestseller"],
        description: "10000+ graphics including logos, icons, and templates",
        screenshots: &["photo-1561070791-2526d30994b5"],
        videos: &[],
    },
    ProductSeed {
        name: "YouTube Success Blueprint",
        category: "E-books",
        price: 59,
        original_price: 399,
        photo: "photo-1516321318423-f06f85e504b3",
        download: "https://drive.google.com/sample7",
        sales: 340,
        badges: &[],
        description: "Step-by-step guide to YouTube monetization and growth",
        screenshots: &[
            "photo-1516321318423-f06f85e504b3",
            "photo-1516321497487-e288fb19713f",
        ],
        videos: &[],
    },
    ProductSeed {
        name: "Premium Thumbnail Collection",
        category: "YouTube Thumbnails",
        price: 179,
        original_price: 1299,
        photo: "photo-1611162616475-46b635cb6868",
        download: "https://drive.google.com/sample8",
        sales: 510,
        badges: &["New"],
        description: "1000+ premium YouTube thumbnails across all niches",
        screenshots: &[
            "photo-1611162616475-46b635cb6868",
            "photo-1611162618479-ee3d24aaef0b",
            "photo-1611162617213-7d7a39e9b1d7",
        ],
        videos: &[],
    },
];

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?w={width}")
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl ProductSeed {
    fn payload(&self) -> AddProductPayload {
        AddProductPayload {
            name: Some(self.name.to_string()),
            description: Some(self.description.to_string()),
            category: Some(self.category.to_string()),
            price: Some(self.price),
            original_price: Some(self.original_price),
            image_url: Some(unsplash(self.photo, 800)),
            download_url: Some(self.download.to_string()),
            sales: Some(self.sales),
            status: Some(ProductStatus::Active),
            badges: Some(owned(self.badges)),
            screenshot_urls: Some(
                self.screenshots
                    .iter()
                    .map(|photo| unsplash(photo, 400))
                    .collect(),
            ),
            video_urls: Some(owned(self.videos)),
        }
    }
}

impl BannerSeed {
    fn payload(&self) -> AddBannerPayload {
        AddBannerPayload {
            title: Some(self.title.to_string()),
            subtitle: Some(self.subtitle.to_string()),
            cta_text: Some(self.cta_text.to_string()),
            cta_link: Some(self.cta_link.to_string()),
            placement: Some(self.placement.to_string()),
            priority: Some(1),
            status: None,
            color: Some(self.color.to_string()),
        }
    }
}

/// Insert the sample catalog unless categories already exist.
///
/// The whole catalog is written in one transaction, so a failed seed leaves
/// the database empty and can be rerun. Returns `None` when the database was
/// left untouched.
pub fn seed_catalog<R>(repo: &R) -> ServiceResult<Option<SeedSummary>>
where
    R: CategoryReader + CatalogWriter + ?Sized,
{
    let existing = repo.list_categories().map_err(ServiceError::from)?;
    if !existing.is_empty() {
        log::info!(
            "Catalog already has {} categories, skipping seed",
            existing.len()
        );
        return Ok(None);
    }

    let categories = CATEGORIES
        .iter()
        .map(|(name, description, color)| {
            AddCategoryPayload {
                name: Some(name.to_string()),
                description: Some(description.to_string()),
                color: Some(color.to_string()),
            }
            .into_new_category()
        })
        .collect::<FormResult<Vec<_>>>()?;
    let banners = BANNERS
        .iter()
        .map(|banner| banner.payload().into_new_banner())
        .collect::<FormResult<Vec<_>>>()?;
    let products = PRODUCTS
        .iter()
        .map(|product| product.payload().into_new_product())
        .collect::<FormResult<Vec<_>>>()?;

    repo.import_catalog(&categories, &banners, &products)
        .map_err(ServiceError::from)?;

    Ok(Some(SeedSummary {
        categories: categories.len(),
        banners: banners.len(),
        products: products.len(),
    }))
}
