//! Business operations generic over the repository traits.

pub mod auth;
pub mod banners;
pub mod categories;
pub mod errors;
pub mod products;
pub mod seed;
pub mod stats;

pub use errors::{ServiceError, ServiceResult};

pub const INVALID_ID_MESSAGE: &str = "Valid numeric ID is required";

/// Parse a path identifier made only of ASCII digits that fits in an `i32`.
pub fn parse_record_id(raw: &str) -> ServiceResult<i32> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ServiceError::Validation(INVALID_ID_MESSAGE.to_string()));
    }
    raw.parse::<i32>()
        .map_err(|_| ServiceError::Validation(INVALID_ID_MESSAGE.to_string()))
}
