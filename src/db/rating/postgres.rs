use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::RatingStore;
use crate::{db::violated_foreign_key, errors::AppError, models::Rating};

const USER_FOREIGN_KEY: &str = "ratings_user_id_fkey";
const CAR_FOREIGN_KEY: &str = "ratings_car_id_fkey";

#[derive(Clone)]
pub struct PgRatingStore {
    postgres: PgPool,
}

impl PgRatingStore {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[async_trait]
impl RatingStore for PgRatingStore {
    async fn submit(&self, car_id: Uuid, user_id: Uuid, score: i16) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO ratings (car_id, user_id, rating)
            VALUES ($1, $2, $3)
            ON CONFLICT (car_id, user_id)
            DO UPDATE SET rating = EXCLUDED.rating, updated_at = NOW()",
        )
        .bind(car_id)
        .bind(user_id)
        .bind(score)
        .execute(&self.postgres)
        .await
        .map_err(submit_error)?;

        tracing::info!("Rating {} stored for car {} by user {}", score, car_id, user_id);

        Ok(())
    }

    async fn find(&self, car_id: Uuid, user_id: Uuid) -> Result<Option<i16>, AppError> {
        sqlx::query_scalar::<_, i16>(
            "SELECT rating FROM ratings WHERE car_id = $1 AND user_id = $2",
        )
        .bind(car_id)
        .bind(user_id)
        .fetch_optional(&self.postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating: {}", e)))
    }

    async fn all(&self) -> Result<Vec<Rating>, AppError> {
        sqlx::query_as::<_, Rating>(
            "SELECT car_id, user_id, rating FROM ratings ORDER BY created_at, car_id, user_id",
        )
        .fetch_all(&self.postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch ratings: {}", e)))
    }
}

/// A token for a deleted account, or a car deleted mid-request, surfaces as a
/// foreign-key violation on insert.
fn submit_error(err: sqlx::Error) -> AppError {
    match violated_foreign_key(&err) {
        Some(USER_FOREIGN_KEY) => AppError::Unauthorized("User no longer exists".into()),
        Some(CAR_FOREIGN_KEY) => AppError::NotFound("Car not found".into()),
        _ => AppError::DatabaseError(format!("Failed to submit rating: {}", err)),
    }
}
