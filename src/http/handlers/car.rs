use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Serialize;
use uuid::Uuid;

use super::MessageResponse;
use crate::{
    auth::{AdminUser, AuthClaims},
    db::car::{
        DUPLICATE_MODEL_MESSAGE,
        delete::delete_car,
        get::{car_model_exists, count_cars, get_all_cars, get_car_by_id},
        post::create_car,
        put::update_car,
    },
    errors::AppError,
    http::upload::{CarForm, remove_images, save_images},
    models::Car,
    state::AppState,
};

#[derive(Serialize)]
pub struct CarMutationResponse {
    pub message: &'static str,
    pub car: Car,
}

#[derive(Serialize)]
pub struct CarWithRatingResponse {
    pub car: Car,
    pub rating: i16,
}

#[derive(Serialize)]
pub struct ModelExistsResponse {
    pub exists: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCountResponse {
    pub total_cars: i64,
}

pub async fn create_car_handler(
    _admin: AdminUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CarMutationResponse>), (StatusCode, String)> {
    let form = CarForm::from_multipart(multipart, "images")
        .await
        .map_err(|e| e.to_response())?;
    let details = form.details().map_err(|e| e.to_response())?;

    let exists = car_model_exists(&details.model, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error while adding car: {}", e);
            e.to_response()
        })?;
    if exists {
        return Err(AppError::BadRequest(DUPLICATE_MODEL_MESSAGE.into()).to_response());
    }

    if form.files.is_empty() {
        return Err(AppError::BadRequest("No images uploaded.".into()).to_response());
    }

    let image_dir = state.config.image_dir.clone();
    let images = save_images(&image_dir, form.files)
        .await
        .map_err(|e| {
            tracing::error!("Error while storing car images: {}", e);
            e.to_response()
        })?;

    match create_car(details, images.clone(), state.postgres.clone()).await {
        Ok(car) => Ok((
            StatusCode::CREATED,
            Json(CarMutationResponse {
                message: "Car added successfully",
                car,
            }),
        )),
        Err(err) => {
            tracing::error!("Error while adding car: {}", err);
            remove_images(&image_dir, &images).await;
            Err(err.to_response())
        }
    }
}

pub async fn check_model_handler(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> Result<Json<ModelExistsResponse>, (StatusCode, String)> {
    let exists = car_model_exists(&model, state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Error checking car model: {}", e);
            e.to_response()
        })?;

    Ok(Json(ModelExistsResponse { exists }))
}

pub async fn get_all_cars_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Car>>, (StatusCode, String)> {
    let cars = get_all_cars(state.postgres).await.map_err(|e| {
        tracing::error!("Error fetching cars data: {}", e);
        e.to_response()
    })?;

    Ok(Json(cars))
}

pub async fn get_all_cars_admin_handler(
    _admin: AdminUser,
    state: State<AppState>,
) -> Result<Json<Vec<Car>>, (StatusCode, String)> {
    get_all_cars_handler(state).await
}

pub async fn get_car_with_rating_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<CarWithRatingResponse>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let car = get_car_by_id(car_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching car data: {}", e);
            e.to_response()
        })?;

    let rating = state
        .ratings
        .find(car_id, user_id)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching rating for car {}: {}", car_id, e);
            e.to_response()
        })?
        .unwrap_or(0);

    Ok(Json(CarWithRatingResponse { car, rating }))
}

pub async fn get_car_handler(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<Car>, (StatusCode, String)> {
    let car = get_car_by_id(car_id, state.postgres).await.map_err(|e| {
        tracing::error!("Error fetching car data: {}", e);
        e.to_response()
    })?;

    Ok(Json(car))
}

pub async fn update_car_handler(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<CarMutationResponse>, (StatusCode, String)> {
    let existing = get_car_by_id(car_id, state.postgres.clone())
        .await
        .map_err(|e| e.to_response())?;

    let form = CarForm::from_multipart(multipart, "image")
        .await
        .map_err(|e| e.to_response())?;
    let details = form.details().map_err(|e| e.to_response())?;

    let image_dir = state.config.image_dir.clone();
    let new_images = if form.files.is_empty() {
        None
    } else {
        Some(save_images(&image_dir, form.files).await.map_err(|e| {
            tracing::error!("Error while storing car images: {}", e);
            e.to_response()
        })?)
    };

    match update_car(car_id, details, new_images.clone(), state.postgres.clone()).await {
        Ok(car) => {
            if new_images.is_some() {
                remove_images(&image_dir, &existing.images).await;
            }
            Ok(Json(CarMutationResponse {
                message: "Car updated successfully",
                car,
            }))
        }
        Err(err) => {
            tracing::error!("Error updating car: {}", err);
            if let Some(images) = &new_images {
                remove_images(&image_dir, images).await;
            }
            Err(err.to_response())
        }
    }
}

pub async fn delete_car_handler(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let car = delete_car(car_id, state.postgres).await.map_err(|e| {
        tracing::error!("Error deleting car data: {}", e);
        e.to_response()
    })?;

    remove_images(&state.config.image_dir, &car.images).await;

    tracing::info!("Deleted car {} {} (ID: {})", car.brand, car.model, car.id);

    Ok(Json(MessageResponse::new(
        "Car data and associated images deleted successfully",
    )))
}

pub async fn car_count_handler(
    State(state): State<AppState>,
) -> Result<Json<CarCountResponse>, (StatusCode, String)> {
    let total_cars = count_cars(state.postgres).await.map_err(|e| {
        tracing::error!("Unable to fetch car count: {}", e);
        e.to_response()
    })?;

    Ok(Json(CarCountResponse { total_cars }))
}
