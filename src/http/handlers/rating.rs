use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use super::MessageResponse;
use crate::{
    analysis::analyze,
    auth::AuthClaims,
    db::car::get::{get_all_cars, get_car_by_id},
    errors::AppError,
    models::{
        Rating,
        rating::{MAX_SCORE, MIN_SCORE, RatingAnalysis},
    },
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePayload {
    pub car_id: Uuid,
    pub rating: i16,
}

pub async fn rate_car_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Json(payload): Json<RatePayload>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    if !Rating::is_valid_score(payload.rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between {MIN_SCORE} and {MAX_SCORE}"
        ))
        .to_response());
    }

    get_car_by_id(payload.car_id, state.postgres.clone())
        .await
        .map_err(|e| e.to_response())?;

    state
        .ratings
        .submit(payload.car_id, user_id, payload.rating)
        .await
        .map_err(|e| {
            tracing::error!("Error submitting rating: {}", e);
            e.to_response()
        })?;

    Ok(Json(MessageResponse::new("Rating submitted successfully")))
}

pub async fn rating_analysis_handler(
    State(state): State<AppState>,
) -> Result<Json<RatingAnalysis>, (StatusCode, String)> {
    let (cars, ratings) = tokio::try_join!(get_all_cars(state.postgres.clone()), state.ratings.all())
        .map_err(|e| {
            tracing::error!("Error fetching car rating analysis: {}", e);
            AppError::DatabaseError("Error fetching car rating analysis".into()).to_response()
        })?;

    Ok(Json(analyze(&cars, &ratings)))
}
