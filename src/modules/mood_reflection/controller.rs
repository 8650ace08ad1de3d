use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::{reject, RelayError};
use crate::modules::mood_reflection::schema::{
    MoodReflectionErrorResponse, MoodReflectionRequest, MoodReflectionResponse,
};
use crate::services::gemini::{first_text_part, GenerateContentRequest, GenerationProvider};
use crate::AppState;

const NO_REFLECTION: &str = "No reflection generated";

pub fn build_reflection_prompt(mood: &str) -> String {
    format!(
        "Generate a short, uplifting journal entry or affirmation for someone feeling {}.",
        mood
    )
}

pub async fn generate_mood_reflection(
    provider: &dyn GenerationProvider,
    model: &str,
    request: MoodReflectionRequest,
) -> Result<MoodReflectionResponse, RelayError> {
    request.validate()?;

    let prompt = build_reflection_prompt(&request.mood);
    tracing::info!(model, prompt_len = prompt.len(), "Generating mood reflection");

    let response = provider
        .generate_content(model, &GenerateContentRequest::text(prompt))
        .await?;

    let reflection = response
        .first_candidate()
        .and_then(first_text_part)
        .ok_or(RelayError::NoContent(NO_REFLECTION))?
        .to_string();

    Ok(MoodReflectionResponse { reflection })
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<MoodReflectionRequest>, JsonRejection>,
) -> Result<Json<MoodReflectionResponse>, (StatusCode, Json<MoodReflectionErrorResponse>)> {
    let Json(payload) = payload.map_err(|e| reject(RelayError::Validation(e.body_text())))?;

    generate_mood_reflection(state.provider.as_ref(), &state.reflection_model, payload)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Error generating mood reflection: {}", e);
            reject(e)
        })
}
