use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::RatingStore;
use crate::{errors::AppError, models::Rating};

/// Process-local store. Keeps first-submission order so `all()` is stable,
/// matching the Postgres store's `ORDER BY created_at`.
#[derive(Default)]
pub struct MemoryRatingStore {
    inner: Mutex<MemoryRatings>,
}

#[derive(Default)]
struct MemoryRatings {
    rows: Vec<Rating>,
    index: HashMap<(Uuid, Uuid), usize>,
}

impl MemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingStore for MemoryRatingStore {
    async fn submit(&self, car_id: Uuid, user_id: Uuid, score: i16) -> Result<(), AppError> {
        let mut guard = self.inner.lock().await;
        let MemoryRatings { rows, index } = &mut *guard;

        match index.get(&(car_id, user_id)) {
            Some(&pos) => rows[pos].rating = score,
            None => {
                index.insert((car_id, user_id), rows.len());
                rows.push(Rating {
                    car_id,
                    user_id,
                    rating: score,
                });
            }
        }

        Ok(())
    }

    async fn find(&self, car_id: Uuid, user_id: Uuid) -> Result<Option<i16>, AppError> {
        let guard = self.inner.lock().await;
        Ok(guard
            .index
            .get(&(car_id, user_id))
            .map(|&pos| guard.rows[pos].rating))
    }

    async fn all(&self) -> Result<Vec<Rating>, AppError> {
        Ok(self.inner.lock().await.rows.clone())
    }
}
