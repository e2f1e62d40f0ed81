use std::time::Duration;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tokio::time::timeout;
use uuid::Uuid;

use crate::modules::users::model::{Identity, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Bound on how long identity resolution may wait on the store before
/// the request is rejected as unauthenticated.
const IDENTITY_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Extractor that validates the bearer token and resolves the caller's
/// identity from the store.
///
/// The resolved identity is cached in the request extensions, so role
/// middleware and handlers on the same request share a single store
/// lookup.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == UserRole::Admin
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(cached) = parts.extensions.get::<AuthUser>() {
            return Ok(cached.clone());
        }

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))?;

        // The token subject must still exist; a deleted account is not
        // an identity.
        let identity = timeout(
            IDENTITY_LOOKUP_TIMEOUT,
            sqlx::query_as::<_, Identity>("SELECT id, name, email, role FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&state.db),
        )
        .await
        .map_err(|_| AppError::unauthorized("Identity resolution timed out"))??
        .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

        let auth_user = AuthUser(identity);
        parts.extensions.insert(auth_user.clone());

        Ok(auth_user)
    }
}
