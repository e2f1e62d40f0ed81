//! Course and lesson handlers.
//!
//! Listing routes are public. Mutations require the instructor or
//! admin role, then resolve the course and check ownership against its
//! instructor. Existence is resolved first, so a 403 never reveals
//! whether a course exists. Lessons have no owner of their own; their
//! authorization is always derived from the owning course.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{check_any_role, check_role};
use crate::modules::auth::model::MessageResponse;
use crate::modules::courses::model::{
    Course, CourseDetail, CourseWithInstructor, CreateCourseDto, CreateLessonDto, Lesson,
    UpdateCourseDto, UpdateLessonDto,
};
use crate::modules::courses::service::CourseService;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::auth_helpers::ensure_owner_or_admin;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all courses
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses with instructor name and email", body = [CourseWithInstructor])
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithInstructor>>, AppError> {
    let courses = CourseService::get_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Get a course with its lessons
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details with lessons", body = CourseDetail),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseDetail>, AppError> {
    let detail = CourseService::get_course_by_id(&state.db, id).await?;
    Ok(Json(detail))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    check_any_role(&auth_user, &[UserRole::Instructor, UserRole::Admin])?;

    let course = CourseService::create_course(&state.db, auth_user.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Update a course's main details
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Updated course", body = Course),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    check_any_role(&auth_user, &[UserRole::Instructor, UserRole::Admin])?;

    let owner_id = CourseService::get_course_owner(&state.db, id).await?;
    ensure_owner_or_admin(&auth_user, owner_id, "update this course")?;

    let course = CourseService::update_course(&state.db, id, dto).await?;
    Ok(Json(course))
}

/// Delete a course and everything it owns
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course, lessons and enrollments removed", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::Instructor, UserRole::Admin])?;

    let owner_id = CourseService::get_course_owner(&state.db, id).await?;
    ensure_owner_or_admin(&auth_user, owner_id, "delete this course")?;

    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Course and its lessons removed".to_string(),
    }))
}

/// List courses created by the authenticated instructor
#[utoipa::path(
    get,
    path = "/api/courses/mycourses",
    responses(
        (status = 200, description = "Courses owned by the caller", body = [Course]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    check_role(&auth_user, UserRole::Instructor)?;

    let courses = CourseService::get_courses_by_instructor(&state.db, auth_user.user_id()).await?;
    Ok(Json(courses))
}

/// Add a lesson to a course
#[utoipa::path(
    post,
    path = "/api/courses/{id}/lessons",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Lesson created", body = Lesson),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course not found")
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn add_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateLessonDto>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    check_any_role(&auth_user, &[UserRole::Instructor, UserRole::Admin])?;

    let owner_id = CourseService::get_course_owner(&state.db, id).await?;
    ensure_owner_or_admin(&auth_user, owner_id, "add lessons to this course")?;

    let lesson = CourseService::add_lesson(&state.db, id, dto).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// Update a lesson within a course
#[utoipa::path(
    put,
    path = "/api/courses/{id}/lessons/{lesson_id}",
    params(
        ("id" = Uuid, Path, description = "Course ID"),
        ("lesson_id" = Uuid, Path, description = "Lesson ID")
    ),
    request_body = UpdateLessonDto,
    responses(
        (status = 200, description = "Updated lesson", body = Lesson),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course or lesson not found")
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((id, lesson_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(dto): ValidatedJson<UpdateLessonDto>,
) -> Result<Json<Lesson>, AppError> {
    check_any_role(&auth_user, &[UserRole::Instructor, UserRole::Admin])?;

    let owner_id = CourseService::get_course_owner(&state.db, id).await?;
    ensure_owner_or_admin(&auth_user, owner_id, "update lessons in this course")?;

    let lesson = CourseService::update_lesson(&state.db, id, lesson_id, dto).await?;
    Ok(Json(lesson))
}

/// Delete a lesson from a course
#[utoipa::path(
    delete,
    path = "/api/courses/{id}/lessons/{lesson_id}",
    params(
        ("id" = Uuid, Path, description = "Course ID"),
        ("lesson_id" = Uuid, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson removed", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course or lesson not found")
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((id, lesson_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::Instructor, UserRole::Admin])?;

    let owner_id = CourseService::get_course_owner(&state.db, id).await?;
    ensure_owner_or_admin(&auth_user, owner_id, "delete lessons from this course")?;

    CourseService::delete_lesson(&state.db, id, lesson_id).await?;
    Ok(Json(MessageResponse {
        message: "Lesson removed successfully".to_string(),
    }))
}
