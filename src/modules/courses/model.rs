//! Course and lesson data models and DTOs.
//!
//! A course exclusively owns its lessons: lessons are created, updated
//! and deleted only through the owning course's routes, and a lesson
//! row cannot outlive its course. The `instructor_id` back-reference is
//! set at creation time and never mutable afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A course as stored.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub instructor_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A course joined with the minimal instructor projection used on the
/// public listing. The instructor's credential is never part of any
/// projection.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct CourseWithInstructor {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub instructor_id: Uuid,
    pub instructor_name: String,
    pub instructor_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A lesson belonging to a course.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course detail: the course with its instructor projection and its
/// lessons in creation order.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct CourseDetail {
    pub course: CourseWithInstructor,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(
        min = 10,
        message = "Description with at least 10 characters is required"
    ))]
    pub description: String,
    pub price: Option<f64>,
    #[validate(url(message = "Thumbnail must be a valid URL"))]
    pub thumbnail_url: Option<String>,
}

/// Partial course update. Absent fields leave the existing value
/// untouched; the instructor is never mutable through this path.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(
        min = 10,
        message = "Description with at least 10 characters is required"
    ))]
    pub description: Option<String>,
    pub price: Option<f64>,
    #[validate(url(message = "Thumbnail must be a valid URL"))]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLessonDto {
    #[validate(length(min = 1, message = "Lesson title is required"))]
    pub title: String,
    pub content: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    pub video_url: Option<String>,
}

/// Partial lesson update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLessonDto {
    #[validate(length(min = 1, message = "Lesson title is required"))]
    pub title: Option<String>,
    pub content: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    pub video_url: Option<String>,
}
