use anyhow::{Context, Result};
use skyline_site::{i18n::BundleValidator, router, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skyline_site=info".parse()?),
        )
        .init();

    info!("Starting Skyline Pro website");

    let config = Config::from_env()?;
    config.cms.validate();
    BundleValidator::validate_registry();

    let addr = format!("{}:{}", config.host, config.port);
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
