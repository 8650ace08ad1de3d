use axum::{routing::post, Router};

use crate::modules::{cors, mood_reflection::controller};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/generate-mood-reflection",
        post(controller::generate).options(cors::preflight),
    )
}
