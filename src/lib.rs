use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::provider::ProviderConfig;
use crate::services::gemini::GenerationProvider;

pub mod config;
pub mod error;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn GenerationProvider>,
    pub art_model: String,
    pub reflection_model: String,
}

impl AppState {
    pub fn new(provider: Arc<dyn GenerationProvider>, config: &ProviderConfig) -> Self {
        Self {
            provider,
            art_model: config.art_model.clone(),
            reflection_model: config.reflection_model.clone(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(modules::mood_art::routes::routes())
        .merge(modules::mood_reflection::routes::routes())
        .merge(modules::health::routes())
        .with_state(state)
        .layer(modules::cors::allow_any_origin())
        .layer(TraceLayer::new_for_http())
}
