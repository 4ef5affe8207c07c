use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
    db::contact::create_contact, errors::AppError, models::contact::ContactMessage,
    state::AppState,
};

#[derive(Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub async fn create_contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<(StatusCode, Json<ContactMessage>), (StatusCode, String)> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    let message = payload.message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(AppError::BadRequest("Error saving contact".into()).to_response());
    }

    let contact = create_contact(
        html_escape::encode_text(name).to_string(),
        html_escape::encode_text(email).to_string(),
        html_escape::encode_text(message).to_string(),
        state.postgres,
    )
    .await
    .map_err(|e| {
        tracing::error!("Error saving contact: {}", e);
        e.to_response()
    })?;

    Ok((StatusCode::CREATED, Json(contact)))
}
