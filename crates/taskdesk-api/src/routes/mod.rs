use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Greeting
        .route("/", get(handlers::root::greeting))

        // Quote relay
        .route("/quotes", get(handlers::quote::get_quotes))

        // Task endpoints. The literal /tasks/completed segment takes
        // precedence over /tasks/:id, independent of registration order.
        .route("/tasks", get(handlers::task::list_tasks))
        .route("/tasks", post(handlers::task::create_task))
        .route("/tasks/completed", get(handlers::task::list_completed_tasks))
        .route("/tasks/:id", get(handlers::task::get_task))
        .route("/tasks/:id", put(handlers::task::update_task))
        .route("/tasks/:id", delete(handlers::task::delete_task))

        // Add state
        .with_state(state)

        // Add CORS and request tracing
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
