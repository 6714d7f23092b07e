pub mod banner;
pub mod category;
pub mod product;
