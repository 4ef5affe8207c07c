use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 5;

/// One user's score for one car. At most one exists per `(car_id, user_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub car_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
}

impl Rating {
    pub fn is_valid_score(score: i16) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&score)
    }
}

/// Derived per-car statistics. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRatingSummary {
    pub car_id: Uuid,
    pub brand: String,
    pub model: String,
    pub total_ratings: u64,
    pub average_rating: f64,
    pub rating_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingAnalysis {
    pub top_cars: Vec<CarRatingSummary>,
    pub car_ratings_with_percentages: Vec<CarRatingSummary>,
}
