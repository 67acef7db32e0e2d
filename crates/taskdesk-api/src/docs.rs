use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI document served by the Swagger UI in development.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root::greeting,
        handlers::quote::get_quotes,
        handlers::task::list_tasks,
        handlers::task::list_completed_tasks,
        handlers::task::get_task,
        handlers::task::create_task,
        handlers::task::update_task,
        handlers::task::delete_task,
    ),
    components(schemas(taskdesk_core::Task, handlers::task::ErrorResponse)),
    info(title = "Taskdesk API", description = "In-memory task CRUD plus a quote relay")
)]
pub struct ApiDoc;
