use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::task::ErrorResponse;
use crate::state::AppState;

/// Relay the external quote feed, body unmodified
#[utoipa::path(
    get,
    path = "/quotes",
    responses(
        (status = 200, description = "Raw quote feed body", body = String),
        (status = 500, description = "Relay failure", body = ErrorResponse)
    )
)]
pub async fn get_quotes(
    State(state): State<AppState>,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    match state.quotes.fetch().await {
        Ok(body) => Ok(body),
        Err(e) => {
            tracing::error!("Quote relay failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
