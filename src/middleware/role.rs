//! Role-based authorization for Axum routes.
//!
//! Two composition styles, both building on the same predicates:
//!
//! 1. Layer-based middleware via [`require_roles`] (used to gate the
//!    whole `/api/users` subtree behind the admin role)
//! 2. In-handler checks via [`check_role`] / [`check_any_role`] (used
//!    where a router mixes public and role-gated routes)

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that rejects the request unless the authenticated caller
/// holds one of `allowed_roles`.
///
/// Authentication runs first as part of the [`AuthUser`] extraction; an
/// unauthenticated request is reported as 401, a wrong role as 403. The
/// resolved identity stays cached in the request extensions for the
/// handler.
pub async fn require_roles(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&auth_user, &allowed_roles)?;

    req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer entry point for admin-only subtrees.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Check that the caller holds exactly `required_role`.
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    check_any_role(auth_user, &[required_role])
}

/// Check that the caller holds one of `allowed_roles`.
///
/// The rejection message enumerates the roles that would have been
/// accepted.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if allowed_roles.contains(&auth_user.role()) {
        return Ok(());
    }

    let roles = allowed_roles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Err(AppError::forbidden(format!(
        "Forbidden: Requires one of the following roles: {}",
        roles
    )))
}
