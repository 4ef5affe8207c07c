use sqlx::PgPool;
use uuid::Uuid;

use super::{CAR_COLUMNS, car_write_error};
use crate::{
    errors::AppError,
    models::{Car, car::CarDetails},
};

/// Overwrites every listing field. `images` of `None` keeps the stored list.
pub async fn update_car(
    car_id: Uuid,
    details: CarDetails,
    images: Option<Vec<String>>,
    postgres: PgPool,
) -> Result<Car, AppError> {
    let car = sqlx::query_as::<_, Car>(&format!(
        "UPDATE cars SET
            model = $2, brand = $3, price = $4, description = $5,
            images = COALESCE($6, images), year = $7, fuel_type = $8, mileage = $9,
            transmission = $10, engine_capacity = $11, seating_capacity = $12,
            body_type = $13, safety_features = $14, boot_space = $15, features = $16,
            warranty = $17
        WHERE id = $1
        RETURNING {CAR_COLUMNS}"
    ))
    .bind(car_id)
    .bind(&details.model)
    .bind(&details.brand)
    .bind(&details.price)
    .bind(&details.description)
    .bind(&images)
    .bind(details.year)
    .bind(&details.fuel_type)
    .bind(&details.mileage)
    .bind(&details.transmission)
    .bind(&details.engine_capacity)
    .bind(&details.seating_capacity)
    .bind(&details.body_type)
    .bind(&details.safety_features)
    .bind(&details.boot_space)
    .bind(&details.features)
    .bind(&details.warranty)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| car_write_error(e, "update"))?
    .ok_or_else(|| AppError::NotFound("Car not found".into()))?;

    tracing::info!("Updated car: {} {} (ID: {})", car.brand, car.model, car.id);

    Ok(car)
}
