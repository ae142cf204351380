//! HTTP handlers for the bakery and baked good endpoints.

pub mod baked_good;
pub mod bakery;
pub mod home;
pub use baked_good::*;
pub use bakery::*;
pub use home::*;

use crate::error::AppError;

/// Parse an `:id` path segment as an integer primary key.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
    }
}
