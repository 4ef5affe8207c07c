use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::{
    db::user::get_user_by_id,
    errors::AppError,
    models::{User, user::Claims},
    state::AppState,
};

pub const TOKEN_COOKIE: &str = "token";
const TOKEN_TTL_HOURS: i64 = 1;
const BCRYPT_COST: u32 = 10;

/// Claims of a caller holding a valid session token.
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                "Access denied. No token provided.".into(),
            )
        })?;

        AuthClaims::from_token(&token, &state.config.jwt_secret)
    }
}

impl AuthClaims {
    pub fn from_token(token: &str, secret: &str) -> Result<Self, (StatusCode, String)> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| (StatusCode::FORBIDDEN, "Invalid token.".into()))?;

        Ok(Self(token_data.claims))
    }

    pub fn user_id(&self) -> Result<Uuid, (StatusCode, String)> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::Unauthorized("Invalid user ID in token".into()).to_response())
    }
}

/// A caller whose token resolves to an existing admin account.
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers)
            .ok_or_else(|| (StatusCode::UNAUTHORIZED, "Please Login".into()))?;
        let claims = AuthClaims::from_token(&token, &state.config.jwt_secret)?;
        let user_id = claims.user_id()?;

        let user = get_user_by_id(user_id, state.postgres.clone())
            .await
            .map_err(|e| {
                tracing::error!("Error in admin check: {}", e);
                e.to_response()
            })?
            .ok_or_else(|| AppError::Unauthorized("Invalid token".into()).to_response())?;

        if !user.is_admin {
            tracing::warn!("Non-admin user {} denied admin access", user.email);
            return Err(AppError::Forbidden("Access denied".into()).to_response());
        }

        Ok(Self(user))
    }
}

/// Session token from the `token` cookie, falling back to the
/// `Authorization` header as either `Bearer <token>` or the bare token.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    if let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

pub fn generate_jwt(user: &User, secret: &str) -> Result<String, AppError> {
    let expiration = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(AppError::JwtError)
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .build()
}

/// Expired `token` cookie that makes the browser drop the session.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((TOKEN_COOKIE, "")).path("/").build();
    cookie.make_removal();
    cookie
}

pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|_| AppError::InternalError)?
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            AppError::InternalError
        })
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|_| AppError::InternalError)?
        .map_err(|e| {
            tracing::error!("Password verification failed: {}", e);
            AppError::InternalError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::http::header::COOKIE;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            user_name: "driver".into(),
            email: "driver@example.com".into(),
            password_hash: String::new(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_decodes_with_same_secret() {
        let user = user();
        let token = generate_jwt(&user, "secret").unwrap();
        let AuthClaims(claims) = AuthClaims::from_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "driver@example.com");
    }

    #[test]
    fn token_with_wrong_secret_is_forbidden() {
        let token = generate_jwt(&user(), "secret").unwrap();
        let err = AuthClaims::from_token(&token, "other").err().unwrap();
        assert_eq!(err.0, StatusCode::FORBIDDEN);
    }

    #[test]
    fn cookie_takes_precedence_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; token=from-cookie"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn header_accepts_bearer_and_bare_tokens() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc.def.ghi"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("abc.def.ghi"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn no_token_present() {
        assert!(token_from_headers(&HeaderMap::new()).is_none());
    }

    #[tokio::test]
    async fn password_hash_verifies() {
        let hash = hash_password("hunter22".into()).await.unwrap();
        assert!(verify_password("hunter22".into(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".into(), hash).await.unwrap());
    }
}
