use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{
    add_lesson, create_course, delete_course, delete_lesson, get_course_by_id, get_courses,
    get_my_courses, update_course, update_lesson,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses).post(create_course))
        .route("/mycourses", get(get_my_courses))
        .route(
            "/{id}",
            get(get_course_by_id)
                .put(update_course)
                .delete(delete_course),
        )
        .route("/{id}/lessons", post(add_lesson))
        .route(
            "/{id}/lessons/{lesson_id}",
            put(update_lesson).delete(delete_lesson),
        )
}
