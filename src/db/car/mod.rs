pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use super::is_unique_violation;
use crate::errors::AppError;

pub(crate) const CAR_COLUMNS: &str = "id, model, brand, price, description, images, year, fuel_type, \
    mileage, transmission, engine_capacity, seating_capacity, body_type, safety_features, \
    boot_space, features, warranty, created_at";

pub(crate) const DUPLICATE_MODEL_MESSAGE: &str =
    "Car model already exists. Please enter a different model.";

/// Maps a failed insert/update; a taken model name is the client's fault.
pub(crate) fn car_write_error(err: sqlx::Error, action: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::BadRequest(DUPLICATE_MODEL_MESSAGE.into())
    } else {
        AppError::DatabaseError(format!("Failed to {} car: {}", action, err))
    }
}
