use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::enrollments::model::{EnrolledCourse, Enrollment};
use crate::utils::errors::AppError;

pub struct EnrollmentService;

impl EnrollmentService {
    /// Record an enrollment fact for (student, course).
    ///
    /// Uniqueness rides on the ledger's unique index rather than a
    /// check-then-write: two concurrent enrolls race on the insert and
    /// the loser surfaces as a unique violation, reported as a 400.
    #[instrument(skip(db))]
    pub async fn enroll(
        db: &PgPool,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, AppError> {
        let instructor_id =
            sqlx::query_scalar::<_, Uuid>("SELECT instructor_id FROM courses WHERE id = $1")
                .bind(course_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::not_found("Course not found"))?;

        if instructor_id == student_id {
            return Err(AppError::bad_request(
                "Instructors cannot enroll in their own course.",
            ));
        }

        let enrollment = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_id, course_id)
             VALUES ($1, $2)
             RETURNING id, student_id, course_id, progress, enrolled_at",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request("Already enrolled in this course");
            }
            AppError::from(e)
        })?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn get_enrolled_courses(
        db: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<EnrolledCourse>, AppError> {
        let courses = sqlx::query_as::<_, EnrolledCourse>(
            "SELECT c.id, c.title, c.description, c.price, c.thumbnail_url, c.instructor_id,
                    u.name AS instructor_name, e.enrolled_at
             FROM enrollments e
             JOIN courses c ON c.id = e.course_id
             JOIN users u ON u.id = c.instructor_id
             WHERE e.student_id = $1
             ORDER BY e.enrolled_at DESC",
        )
        .bind(student_id)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }
}
