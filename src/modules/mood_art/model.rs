use serde_json::Value;

const ART_PROMPT_PREFIX: &str = "Generate an image that reflects the user's current mood: ";

/// Prompt sent to the image model. Details that are empty after trimming are
/// left out entirely.
pub fn build_art_prompt(mood: &str, additional_details: Option<&str>) -> String {
    let mut prompt = format!("{}{}", ART_PROMPT_PREFIX, mood);

    if let Some(details) = additional_details.map(str::trim).filter(|d| !d.is_empty()) {
        prompt.push_str(". Additional context: ");
        prompt.push_str(details);
    }

    prompt
}

/// Finds the first inline image in a passed-through candidate and renders it
/// as a `data:` URI the way the browser does before showing it.
pub fn inline_image_data_uri(generated_content: &Value) -> Option<String> {
    generated_content
        .pointer("/content/parts")?
        .as_array()?
        .iter()
        .filter_map(|part| part.get("inlineData"))
        .find_map(|inline| {
            let mime_type = inline.get("mimeType")?.as_str()?;
            if !mime_type.starts_with("image/") {
                return None;
            }
            let data = inline.get("data")?.as_str()?;
            Some(format!("data:{};base64,{}", mime_type, data))
        })
}
