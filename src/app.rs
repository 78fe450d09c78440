use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::login))
        .route("/auth/callback", get(handlers::callback))
        .route("/review", get(handlers::review))
        .route("/api/kudos", get(handlers::api_kudos))
        .with_state(state)
}
