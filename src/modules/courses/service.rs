use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{
    Course, CourseDetail, CourseWithInstructor, CreateCourseDto, CreateLessonDto, Lesson,
    UpdateCourseDto, UpdateLessonDto,
};
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    /// Resolve the owning instructor of a course, or 404.
    ///
    /// Callers run this before any ownership check so a missing course
    /// reports `NotFound` rather than `Forbidden`.
    #[instrument(skip(db))]
    pub async fn get_course_owner(db: &PgPool, course_id: Uuid) -> Result<Uuid, AppError> {
        let instructor_id =
            sqlx::query_scalar::<_, Uuid>("SELECT instructor_id FROM courses WHERE id = $1")
                .bind(course_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::not_found("Course not found"))?;

        Ok(instructor_id)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_course(
        db: &PgPool,
        instructor_id: Uuid,
        dto: CreateCourseDto,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, description, price, thumbnail_url, instructor_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, description, price, thumbnail_url, instructor_id,
                       created_at, updated_at",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(&dto.thumbnail_url)
        .bind(instructor_id)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_courses(db: &PgPool) -> Result<Vec<CourseWithInstructor>, AppError> {
        let courses = sqlx::query_as::<_, CourseWithInstructor>(
            "SELECT c.id, c.title, c.description, c.price, c.thumbnail_url, c.instructor_id,
                    u.name AS instructor_name, u.email AS instructor_email,
                    c.created_at, c.updated_at
             FROM courses c
             JOIN users u ON u.id = c.instructor_id
             ORDER BY c.created_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, course_id: Uuid) -> Result<CourseDetail, AppError> {
        let course = sqlx::query_as::<_, CourseWithInstructor>(
            "SELECT c.id, c.title, c.description, c.price, c.thumbnail_url, c.instructor_id,
                    u.name AS instructor_name, u.email AS instructor_email,
                    c.created_at, c.updated_at
             FROM courses c
             JOIN users u ON u.id = c.instructor_id
             WHERE c.id = $1",
        )
        .bind(course_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;

        let lessons = Self::get_lessons(db, course_id).await?;

        Ok(CourseDetail { course, lessons })
    }

    #[instrument(skip(db))]
    pub async fn get_courses_by_instructor(
        db: &PgPool,
        instructor_id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, price, thumbnail_url, instructor_id,
                    created_at, updated_at
             FROM courses
             WHERE instructor_id = $1
             ORDER BY created_at DESC",
        )
        .bind(instructor_id)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        course_id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "UPDATE courses
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 price = COALESCE($4, price),
                 thumbnail_url = COALESCE($5, thumbnail_url),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, title, description, price, thumbnail_url, instructor_id,
                       created_at, updated_at",
        )
        .bind(course_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(&dto.thumbnail_url)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;

        Ok(course)
    }

    /// Delete a course together with its lessons and enrollment facts.
    ///
    /// Runs as one transaction, dependents first, so no read can ever
    /// observe lessons or enrollments referencing a deleted course.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, course_id: Uuid) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        sqlx::query("DELETE FROM lessons WHERE course_id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM enrollments WHERE course_id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Course not found"));
        }

        tx.commit().await?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_lessons(db: &PgPool, course_id: Uuid) -> Result<Vec<Lesson>, AppError> {
        let lessons = sqlx::query_as::<_, Lesson>(
            "SELECT id, title, content, video_url, course_id, created_at, updated_at
             FROM lessons
             WHERE course_id = $1
             ORDER BY created_at ASC",
        )
        .bind(course_id)
        .fetch_all(db)
        .await?;

        Ok(lessons)
    }

    #[instrument(skip(db, dto))]
    pub async fn add_lesson(
        db: &PgPool,
        course_id: Uuid,
        dto: CreateLessonDto,
    ) -> Result<Lesson, AppError> {
        let lesson = sqlx::query_as::<_, Lesson>(
            "INSERT INTO lessons (title, content, video_url, course_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, content, video_url, course_id, created_at, updated_at",
        )
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(&dto.video_url)
        .bind(course_id)
        .fetch_one(db)
        .await?;

        Ok(lesson)
    }

    /// Update a lesson, addressed through its owning course so a lesson
    /// id from another course reports `NotFound`.
    #[instrument(skip(db, dto))]
    pub async fn update_lesson(
        db: &PgPool,
        course_id: Uuid,
        lesson_id: Uuid,
        dto: UpdateLessonDto,
    ) -> Result<Lesson, AppError> {
        let lesson = sqlx::query_as::<_, Lesson>(
            "UPDATE lessons
             SET title = COALESCE($3, title),
                 content = COALESCE($4, content),
                 video_url = COALESCE($5, video_url),
                 updated_at = now()
             WHERE id = $1 AND course_id = $2
             RETURNING id, title, content, video_url, course_id, created_at, updated_at",
        )
        .bind(lesson_id)
        .bind(course_id)
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(&dto.video_url)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Lesson not found"))?;

        Ok(lesson)
    }

    #[instrument(skip(db))]
    pub async fn delete_lesson(
        db: &PgPool,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1 AND course_id = $2")
            .bind(lesson_id)
            .bind(course_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Lesson not found"));
        }

        Ok(())
    }
}
