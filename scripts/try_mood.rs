//! Run with: cargo run --bin try_mood -- "<mood>" ["<details>"]
//!
//! Walks through what the browser does: ask for mood art, save the image if
//! one came back, then ask for a reflection. Needs the server running.

use base64::Engine as _;
use mood_canvas::modules::mood_art::model::inline_image_data_uri;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::time::Instant;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtResponse {
    art_description: String,
    #[serde(default)]
    generated_content: Value,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReflectionResponse {
    reflection: String,
    error: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut args = env::args().skip(1);
    let mood = args.next().unwrap_or_else(|| "hopeful".to_string());
    let details = args.next();
    let base_url = env::var("MOOD_CANVAS_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

    let client = Client::new();

    println!("\n🎨 Mood: {}", mood);
    if let Some(details) = &details {
        println!("📝 Details: {}", details);
    }

    let start = Instant::now();
    let art: ArtResponse = client
        .post(format!("{}/generate-mood-art", base_url))
        .json(&json!({ "mood": mood, "additionalDetails": details }))
        .send()
        .await?
        .json()
        .await?;
    println!("⏱️  Art response time: {}ms", start.elapsed().as_millis());

    if let Some(error) = art.error {
        println!("❌ Art error: {}", error);
        return Ok(());
    }

    println!("\n🖼️  Description:\n{}\n", art.art_description);

    match inline_image_data_uri(&art.generated_content) {
        Some(uri) => save_image(&uri)?,
        None => println!("No image in response"),
    }

    let start = Instant::now();
    let reflection: ReflectionResponse = client
        .post(format!("{}/generate-mood-reflection", base_url))
        .json(&json!({ "mood": mood }))
        .send()
        .await?
        .json()
        .await?;
    println!("⏱️  Reflection response time: {}ms", start.elapsed().as_millis());

    match reflection.error {
        Some(error) => println!("❌ Reflection error: {}", error),
        None => println!("\n🌱 Reflection:\n{}\n", reflection.reflection),
    }

    Ok(())
}

fn save_image(data_uri: &str) -> anyhow::Result<()> {
    let (header, data) = data_uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .ok_or_else(|| anyhow::anyhow!("Unexpected data URI"))?;

    let extension = header.strip_prefix("image/").unwrap_or("bin");
    let bytes = base64::engine::general_purpose::STANDARD.decode(data)?;
    let file_name = format!("mood-art.{}", extension);
    std::fs::write(&file_name, &bytes)?;

    println!("✓ Saved {} ({} bytes)", file_name, bytes.len());
    Ok(())
}
