use axum::{routing::post, Router};

use crate::modules::{cors, mood_art::controller};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/generate-mood-art",
        post(controller::generate).options(cors::preflight),
    )
}
