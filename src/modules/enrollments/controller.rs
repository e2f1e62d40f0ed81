use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_role;
use crate::modules::auth::model::MessageResponse;
use crate::modules::enrollments::model::EnrolledCourse;
use crate::modules::enrollments::service::EnrollmentService;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Enroll the authenticated student in a course
#[utoipa::path(
    post,
    path = "/api/courses/{id}/enroll",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 201, description = "Enrollment recorded", body = MessageResponse),
        (status = 400, description = "Already enrolled, or enrolling in own course"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course not found")
    ),
    tag = "Enrollments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn enroll_in_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    check_role(&auth_user, UserRole::Student)?;

    EnrollmentService::enroll(&state.db, auth_user.user_id(), id).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Successfully enrolled".to_string(),
        }),
    ))
}

/// List the authenticated student's enrolled courses
#[utoipa::path(
    get,
    path = "/api/courses/myenrollments",
    responses(
        (status = 200, description = "Courses the caller is enrolled in", body = [EnrolledCourse]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Enrollments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_enrollments(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<EnrolledCourse>>, AppError> {
    check_role(&auth_user, UserRole::Student)?;

    let courses =
        EnrollmentService::get_enrolled_courses(&state.db, auth_user.user_id()).await?;
    Ok(Json(courses))
}
