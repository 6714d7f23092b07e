pub mod auth;
pub mod banner;
pub mod category;
pub mod image_url;
pub mod product;
pub mod slug;
pub mod stats;
pub mod timestamp;
