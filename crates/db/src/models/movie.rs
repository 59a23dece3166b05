//! Movie entity model and DTOs.

use cinedex_core::types::{Date, DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: Date,
    pub genre: String,
    pub rating: String,
    /// Currency amount with fixed decimal precision (NUMERIC column).
    pub price: Decimal,
    /// Optimistic-concurrency token, incremented on every successful update.
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 100, message = "Title is required"))]
    pub title: String,
    pub release_date: Date,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
    #[validate(length(min = 1, message = "Rating is required"))]
    pub rating: String,
    #[validate(custom(function = validate_price))]
    pub price: Decimal,
}

/// DTO for updating a movie: a full-record replacement, not a partial patch.
///
/// Carries the `id` the client believes it is editing (checked against the
/// route) and the `version` it last read (checked by the store).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMovie {
    pub id: DbId,
    #[validate(length(min = 1, max = 100, message = "Title is required"))]
    pub title: String,
    pub release_date: Date,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
    #[validate(length(min = 1, message = "Rating is required"))]
    pub rating: String,
    #[validate(custom(function = validate_price))]
    pub price: Decimal,
    /// The version the client last read.
    pub version: i64,
}

/// Prices are non-negative; the decimal type already rules out drift.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price_negative")
            .with_message("Price must not be negative".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, price: Decimal) -> CreateMovie {
        CreateMovie {
            title: title.to_string(),
            release_date: Date::from_ymd_opt(1984, 3, 13).unwrap(),
            genre: "Comedy".to_string(),
            rating: "PG".to_string(),
            price,
        }
    }

    #[test]
    fn test_valid_candidate_passes() {
        let input = candidate("Ghostbusters", Decimal::new(899, 2));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let input = candidate("", Decimal::new(899, 2));
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let input = candidate("Ghostbusters", Decimal::new(-1, 2));
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }
}
