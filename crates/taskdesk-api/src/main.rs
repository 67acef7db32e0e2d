use anyhow::Result;
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use taskdesk_api::{docs, routes, state::AppState};
use taskdesk_core::TaskStore;
use taskdesk_quotes::QuoteClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdesk_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Get configuration
    let port = env::var("API_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    // Create app state
    let state = AppState {
        store: TaskStore::new(),
        quotes: Arc::new(QuoteClient::new()),
    };

    // Build router
    let mut app = routes::create_router(state);

    // Interactive docs are a development convenience only
    if environment == "development" {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        );
        tracing::info!("Swagger UI mounted at /swagger-ui");
    }

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Taskdesk API running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
