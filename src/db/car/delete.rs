use sqlx::PgPool;
use uuid::Uuid;

use super::CAR_COLUMNS;
use crate::{errors::AppError, models::Car};

/// Removes the car and, through the foreign key, its ratings. Returns the
/// deleted row so the caller can clean up image files.
pub async fn delete_car(car_id: Uuid, postgres: PgPool) -> Result<Car, AppError> {
    sqlx::query_as::<_, Car>(&format!(
        "DELETE FROM cars WHERE id = $1 RETURNING {CAR_COLUMNS}"
    ))
    .bind(car_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to delete car: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Car data not found".into()))
}
