use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{UpdateUserDto, User, UserRole};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at, updated_at
             FROM users
             ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user_by_id(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }

    /// Partial update; this is the only path through which a role can
    /// change.
    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 role = COALESCE($4, role),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, name, email, role, created_at, updated_at",
        )
        .bind(user_id)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(dto.role)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request("Email already exists");
            }
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }

    /// Delete a user account.
    ///
    /// Admin accounts cannot be deleted. A user who still owns courses
    /// cannot be deleted either; the courses must be deleted or handed
    /// off first. A student's enrollment facts are removed in the same
    /// transaction as the account.
    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if role == UserRole::Admin {
            return Err(AppError::bad_request("Cannot delete an admin user."));
        }

        let owned_courses =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses WHERE instructor_id = $1")
                .bind(user_id)
                .fetch_one(db)
                .await?;

        if owned_courses > 0 {
            return Err(AppError::bad_request(
                "Cannot delete a user who still owns courses",
            ));
        }

        let mut tx = db.begin().await?;

        sqlx::query("DELETE FROM enrollments WHERE student_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
