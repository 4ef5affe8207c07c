use sqlx::PgPool;
use uuid::Uuid;

use super::{CAR_COLUMNS, car_write_error};
use crate::{
    errors::AppError,
    models::{Car, car::CarDetails},
};

pub async fn create_car(
    details: CarDetails,
    images: Vec<String>,
    postgres: PgPool,
) -> Result<Car, AppError> {
    let car = sqlx::query_as::<_, Car>(&format!(
        "INSERT INTO cars (id, model, brand, price, description, images, year, fuel_type,
            mileage, transmission, engine_capacity, seating_capacity, body_type,
            safety_features, boot_space, features, warranty)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
        RETURNING {CAR_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
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
    .fetch_one(&postgres)
    .await
    .map_err(|e| car_write_error(e, "create"))?;

    tracing::info!("Created car: {} {} (ID: {})", car.brand, car.model, car.id);

    Ok(car)
}
