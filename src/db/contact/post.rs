use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::contact::ContactMessage};

pub async fn create_contact(
    name: String,
    email: String,
    message: String,
    postgres: PgPool,
) -> Result<ContactMessage, AppError> {
    let contact = sqlx::query_as::<_, ContactMessage>(
        "INSERT INTO contacts (id, name, email, message)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, message, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&name)
    .bind(&email)
    .bind(&message)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to save contact: {}", e)))?;

    tracing::info!("Stored contact message {} from {}", contact.id, contact.email);

    Ok(contact)
}
