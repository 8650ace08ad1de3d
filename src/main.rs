use anyhow::Context;
use mood_canvas::{
    app,
    config::{provider::ProviderConfig, server::ServerConfig},
    services::gemini::PicaGeminiClient,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mood_canvas=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server = ServerConfig::from_env()?;
    let provider_config = ProviderConfig::from_env();

    if provider_config.secret_key.is_empty() || provider_config.connection_key.is_empty() {
        tracing::warn!("Pica credentials are not set; provider calls will be rejected upstream");
    }
    tracing::info!(config = ?provider_config, "Provider configured");

    let state = AppState::new(
        Arc::new(PicaGeminiClient::new(provider_config.clone())),
        &provider_config,
    );

    let addr = server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Mood Canvas relay listening on {}", addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
