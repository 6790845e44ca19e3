use anyhow::Context;
use llm::ChatClient;
use std::sync::Arc;
use web::{AppState, build_router, config::Config, middleware::cors::AllowedOrigins};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting disc golf analysis API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let client = ChatClient::new(
        config.llm_base_url.clone(),
        config.llm_api_key.clone(),
        config.llm_model.clone(),
    )
    .context("Failed to create LLM client")?;
    tracing::info!(
        "Using model {} at {}",
        client.model(),
        config.llm_base_url
    );

    let origins = AllowedOrigins::from_comma_separated(&config.allowed_origins);
    if origins.is_empty() {
        tracing::warn!("ALLOWED_ORIGINS is empty, cross-origin requests will be rejected");
    } else {
        tracing::info!("CORS enabled for {} origins", origins.len());
    }

    let app = build_router(AppState::new(Arc::new(client)), origins.layer());

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
