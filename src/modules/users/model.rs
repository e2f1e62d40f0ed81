//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - User entity as returned by the API (credential excluded)
//! - [`Identity`] - Minimal authenticated profile attached to a request
//! - [`UserRole`] - Closed role enumeration
//!
//! # Request DTOs
//!
//! - [`UpdateUserDto`] - Admin-only partial update (the only path that
//!   can change a role)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Platform role.
///
/// Stored as the `user_role` Postgres enum; role sets required by a
/// route are fixed slices of this type, never free-form strings.
#[derive(Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Instructor,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slug = match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        };
        write!(f, "{}", slug)
    }
}

/// A user account.
///
/// The credential hash never appears on this struct; queries that need
/// it use a local projection inside the auth service.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The authenticated caller's minimal profile, resolved from the store
/// during token verification and attached to the request context.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// DTO for updating a user. All fields optional; absent fields leave
/// the existing value untouched.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(email(message = "Please include a valid email"))]
    pub email: Option<String>,
    pub role: Option<UserRole>,
}
