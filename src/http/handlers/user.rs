use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MessageResponse;
use crate::{
    auth::{
        AdminUser, AuthClaims, generate_jwt, hash_password, removal_cookie, session_cookie,
        verify_password,
    },
    db::user::{
        create_user,
        delete::delete_user,
        get::{count_users, get_all_users},
        get_user_by_email,
    },
    errors::AppError,
    models::User,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCheckResponse {
    pub is_logged_in: bool,
    pub user_id: String,
}

#[derive(Serialize)]
pub struct AdminCheckResponse {
    pub isadmin: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCountResponse {
    pub total_users: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNameResponse {
    pub user_name: String,
}

pub async fn signup_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SignupPayload>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), (StatusCode, String)> {
    let user_name = payload.user_name.trim().to_string();
    let email = payload.email.trim().to_lowercase();
    if user_name.is_empty() || email.is_empty() || payload.password.is_empty() {
        return Err(
            AppError::BadRequest("userName, email and password are required".into()).to_response(),
        );
    }

    let existing = get_user_by_email(&email, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error during signup: {}", e);
            e.to_response()
        })?;
    if existing.is_some() {
        return Err(AppError::BadRequest("User already exists".into()).to_response());
    }

    let password_hash = hash_password(payload.password).await.map_err(|e| e.to_response())?;

    let user = create_user(user_name, email, password_hash, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error during signup: {}", e);
            e.to_response()
        })?;

    let token =
        generate_jwt(&user, &state.config.jwt_secret).map_err(|e| e.to_response())?;
    let jar = jar.add(session_cookie(token.clone(), state.config.secure_cookies));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            success: true,
            message: "User registered successfully",
            token: Some(token),
        }),
    ))
}

pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<(CookieJar, Json<AuthResponse>), (StatusCode, String)> {
    let email = payload.email.trim().to_lowercase();

    let user = get_user_by_email(&email, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error during login: {}", e);
            e.to_response()
        })?
        .ok_or_else(|| AppError::BadRequest("User does not exist".into()).to_response())?;

    let matches = verify_password(payload.password, user.password_hash.clone())
        .await
        .map_err(|e| e.to_response())?;
    if !matches {
        tracing::warn!("Failed login attempt for {}", user.email);
        return Err(AppError::BadRequest("Invalid credentials".into()).to_response());
    }

    let token =
        generate_jwt(&user, &state.config.jwt_secret).map_err(|e| e.to_response())?;
    let jar = jar.add(session_cookie(token.clone(), state.config.secure_cookies));

    tracing::info!("User logged in: {}", user.email);

    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            message: "Logged in successfully",
            token: Some(token),
        }),
    ))
}

pub async fn logout_handler(jar: CookieJar) -> (CookieJar, Json<AuthResponse>) {
    (
        jar.add(removal_cookie()),
        Json(AuthResponse {
            success: true,
            message: "Logged out successfully",
            token: None,
        }),
    )
}

pub async fn auth_check_handler(AuthClaims(claims): AuthClaims) -> Json<AuthCheckResponse> {
    Json(AuthCheckResponse {
        is_logged_in: true,
        user_id: claims.email,
    })
}

pub async fn admin_check_handler(_admin: AdminUser) -> Json<AdminCheckResponse> {
    Json(AdminCheckResponse { isadmin: "true" })
}

pub async fn user_count_handler(
    State(state): State<AppState>,
) -> Result<Json<UserCountResponse>, (StatusCode, String)> {
    let total_users = count_users(state.postgres).await.map_err(|e| {
        tracing::error!("Unable to fetch user count: {}", e);
        e.to_response()
    })?;

    Ok(Json(UserCountResponse { total_users }))
}

pub async fn get_all_users_handler(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = get_all_users(state.postgres).await.map_err(|e| {
        tracing::error!("Error fetching users: {}", e);
        e.to_response()
    })?;

    Ok(Json(users))
}

pub async fn delete_user_handler(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    if admin.id == user_id {
        return Err(AppError::BadRequest("Admins cannot delete themselves".into()).to_response());
    }

    delete_user(user_id, state.postgres).await.map_err(|e| {
        tracing::error!("Error deleting user: {}", e);
        e.to_response()
    })?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

pub async fn get_user_name_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserNameResponse>, (StatusCode, String)> {
    let user = get_user_by_email(&email.trim().to_lowercase(), state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching user details: {}", e);
            e.to_response()
        })?
        .ok_or_else(|| AppError::NotFound("User not found".into()).to_response())?;

    Ok(Json(UserNameResponse {
        user_name: user.user_name,
    }))
}
