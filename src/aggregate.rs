use rust_decimal::{Decimal, RoundingStrategy};

use crate::{errors::AppError, models::StoreAggregate};

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Accepts a raw JSON number from the submission payload. Fractional values
/// (e.g. 3.5) and out-of-range integers are both rejected as invalid ratings
/// rather than left to the transport layer.
pub fn parse_rating_value(raw: &serde_json::Number) -> Result<i16, AppError> {
    let value = raw
        .as_i64()
        .and_then(|v| i16::try_from(v).ok())
        .ok_or_else(|| {
            AppError::InvalidRating(format!("Rating must be a whole number, got {}", raw))
        })?;

    validate_rating_value(value)?;
    Ok(value)
}

pub fn validate_rating_value(value: i16) -> Result<(), AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(AppError::InvalidRating(format!(
            "Rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, value
        )));
    }
    Ok(())
}

/// Derives a store's aggregate statistics from the full set of its current
/// rating values. An empty set yields 0.00 / 0; otherwise the mean is rounded
/// to two decimal places, half-up.
pub fn aggregate_from_values(values: &[i16]) -> StoreAggregate {
    if values.is_empty() {
        return StoreAggregate {
            average_rating: Decimal::new(0, 2),
            total_ratings: 0,
        };
    }

    let sum: i64 = values.iter().map(|v| i64::from(*v)).sum();
    let average = (Decimal::from(sum) / Decimal::from(values.len() as i64))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    StoreAggregate {
        average_rating: average,
        total_ratings: values.len() as i32,
    }
}
