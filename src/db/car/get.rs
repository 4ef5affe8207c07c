use sqlx::PgPool;
use uuid::Uuid;

use super::CAR_COLUMNS;
use crate::{errors::AppError, models::Car};

/// All cars, oldest listing first. Rating analysis relies on this order for ties.
pub async fn get_all_cars(postgres: PgPool) -> Result<Vec<Car>, AppError> {
    sqlx::query_as::<_, Car>(&format!(
        "SELECT {CAR_COLUMNS} FROM cars ORDER BY created_at, id"
    ))
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch cars: {}", e)))
}

pub async fn get_car_by_id(car_id: Uuid, postgres: PgPool) -> Result<Car, AppError> {
    sqlx::query_as::<_, Car>(&format!("SELECT {CAR_COLUMNS} FROM cars WHERE id = $1"))
        .bind(car_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch car: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Car not found".into()))
}

pub async fn car_model_exists(model: &str, postgres: PgPool) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cars WHERE model = $1)")
        .bind(model)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to query car model: {}", e)))
}

pub async fn count_cars(postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cars")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count cars: {}", e)))
}
