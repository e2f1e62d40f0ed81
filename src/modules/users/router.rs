use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{delete_user, get_user_by_id, get_users, update_user};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route(
            "/{id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
}
