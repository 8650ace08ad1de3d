use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::{reject, RelayError};
use crate::modules::mood_art::{
    model::build_art_prompt,
    schema::{MoodArtErrorResponse, MoodArtRequest, MoodArtResponse},
};
use crate::services::gemini::{first_text_part, GenerateContentRequest, GenerationProvider};
use crate::AppState;

const NO_CONTENT: &str = "No generated content returned from Gemini API";

/// Runs one mood-art round trip: validate, prompt, a single provider call,
/// then pull the description out of the first candidate.
pub async fn generate_mood_art(
    provider: &dyn GenerationProvider,
    model: &str,
    request: MoodArtRequest,
) -> Result<MoodArtResponse, RelayError> {
    request.validate()?;

    let prompt = build_art_prompt(&request.mood, request.additional_details.as_deref());
    tracing::info!(model, prompt_len = prompt.len(), "Generating mood art");

    let response = provider
        .generate_content(model, &GenerateContentRequest::text_and_image(prompt))
        .await?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(RelayError::NoContent(NO_CONTENT))?;

    let art_description = first_text_part(&candidate).unwrap_or_default().to_string();

    Ok(MoodArtResponse {
        art_description,
        generated_content: candidate,
    })
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<MoodArtRequest>, JsonRejection>,
) -> Result<Json<MoodArtResponse>, (StatusCode, Json<MoodArtErrorResponse>)> {
    let Json(payload) = payload.map_err(|e| reject(RelayError::Validation(e.body_text())))?;

    generate_mood_art(state.provider.as_ref(), &state.art_model, payload)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Error generating mood art: {}", e);
            reject(e)
        })
}
