//! 用户资源

pub mod handler;
pub mod model;
pub mod store;

use axum::{routing::get, Router};

use super::AppState;

pub use model::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserChanges, UserRecord};
pub use store::{StoreError, UserStore};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users).post(handler::create_user))
        .route(
            "/users/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
}
