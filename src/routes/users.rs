//! User resource routes. Handlers resolve rows through the shared client
//! carried in state.

use crate::handlers::users::{create, list, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/:id", get(read))
        .with_state(state)
}
