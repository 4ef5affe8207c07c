use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::User};

/// Inserts a new account. `password_hash` must already be hashed. An email
/// that is already registered yields `BadRequest`.
pub async fn create_user(
    user_name: String,
    email: String,
    password_hash: String,
    postgres: PgPool,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, user_name, email, password_hash)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        RETURNING id, user_name, email, password_hash, is_admin, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&user_name)
    .bind(&email)
    .bind(&password_hash)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create user: {}", e)))?
    .ok_or_else(|| AppError::BadRequest("User already exists".into()))?;

    tracing::info!("Created user: {} (ID: {})", user.email, user.id);

    Ok(user)
}
