use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto};
use crate::modules::courses::model::{
    Course, CourseDetail, CourseWithInstructor, CreateCourseDto, CreateLessonDto, Lesson,
    UpdateCourseDto, UpdateLessonDto,
};
use crate::modules::enrollments::model::{EnrolledCourse, Enrollment};
use crate::modules::users::model::{UpdateUserDto, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_profile,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user_by_id,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course_by_id,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::get_my_courses,
        crate::modules::courses::controller::add_lesson,
        crate::modules::courses::controller::update_lesson,
        crate::modules::courses::controller::delete_lesson,
        crate::modules::enrollments::controller::enroll_in_course,
        crate::modules::enrollments::controller::get_my_enrollments,
    ),
    components(
        schemas(
            User,
            UserRole,
            UpdateUserDto,
            RegisterRequestDto,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            Course,
            CourseWithInstructor,
            CourseDetail,
            Lesson,
            CreateCourseDto,
            UpdateCourseDto,
            CreateLessonDto,
            UpdateLessonDto,
            Enrollment,
            EnrolledCourse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and profile"),
        (name = "Users", description = "Admin-only user administration"),
        (name = "Courses", description = "Course authoring and public catalog"),
        (name = "Lessons", description = "Lesson authoring through the owning course"),
        (name = "Enrollments", description = "Student enrollment ledger")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
