use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{enroll_in_course, get_my_enrollments};

/// Enrollment routes live under the `/api/courses` namespace and are
/// merged into the courses router.
pub fn init_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/myenrollments", get(get_my_enrollments))
        .route("/{id}/enroll", post(enroll_in_course))
}
