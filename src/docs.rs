//! OpenAPI document for the todo API, served only outside production.

use axum::Json;
use utoipa::OpenApi;

use crate::model::{Todo, TodoInput};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "Minimal versioned CRUD API over an in-memory todo list.",
        version = "1.1"
    ),
    paths(
        routes::list_todos,
        routes::list_complete,
        routes::get_todo,
        routes::create_todo,
        routes::update_todo,
        routes::delete_todo,
    ),
    components(schemas(Todo, TodoInput))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
