mod memory;
mod postgres;

pub use memory::MemoryRatingStore;
pub use postgres::PgRatingStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{errors::AppError, models::Rating};

/// Persistence for user ratings, one row per `(car_id, user_id)`.
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Inserts the rating or overwrites the score of an existing pair.
    /// Concurrent submissions for the same pair resolve last-write-wins.
    async fn submit(&self, car_id: Uuid, user_id: Uuid, score: i16) -> Result<(), AppError>;

    async fn find(&self, car_id: Uuid, user_id: Uuid) -> Result<Option<i16>, AppError>;

    async fn all(&self) -> Result<Vec<Rating>, AppError>;
}
