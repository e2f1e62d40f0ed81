//! Ownership checks shared by resource handlers.
//!
//! Resource ownership is always evaluated after the resource has been
//! loaded, so a missing resource reports 404 before any 403 can leak
//! whether it exists.

use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Check that the acting identity owns the resource or holds the admin
/// role.
///
/// `action` names the attempted operation and is echoed in the error
/// message ("User not authorized to update this course").
pub fn ensure_owner_or_admin(
    auth_user: &AuthUser,
    owner_id: Uuid,
    action: &str,
) -> Result<(), AppError> {
    if auth_user.user_id() == owner_id || auth_user.role() == UserRole::Admin {
        return Ok(());
    }

    Err(AppError::forbidden(format!(
        "User not authorized to {}",
        action
    )))
}
