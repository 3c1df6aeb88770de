//! Route handlers for the `/todoitems` surface.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::model::{Todo, TodoInput};
use crate::store::Db;

#[utoipa::path(
    get,
    path = "/todoitems",
    responses((status = 200, description = "All todo items", body = [Todo]))
)]
pub(crate) async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

#[utoipa::path(
    get,
    path = "/todoitems/complete",
    responses((status = 200, description = "Completed todo items", body = [Todo]))
)]
pub(crate) async fn list_complete(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list_complete())
}

#[utoipa::path(
    get,
    path = "/todoitems/{id}",
    params(("id" = u64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo item", body = Todo),
        (status = 404, description = "No todo with that id")
    )
)]
pub(crate) async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    db.read()
        .await
        .get(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[utoipa::path(
    post,
    path = "/todoitems",
    request_body = TodoInput,
    responses((status = 201, description = "Created todo item", body = Todo))
)]
pub(crate) async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoInput>,
) -> impl IntoResponse {
    let todo = db.write().await.insert(input);
    let location = format!("/todoitems/{}", todo.id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    )
}

#[utoipa::path(
    put,
    path = "/todoitems/{id}",
    params(("id" = u64, Path, description = "Todo id")),
    request_body = TodoInput,
    responses(
        (status = 204, description = "Todo updated"),
        (status = 404, description = "No todo with that id")
    )
)]
pub(crate) async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TodoInput>,
) -> StatusCode {
    if db.write().await.update(id, input) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

#[utoipa::path(
    delete,
    path = "/todoitems/{id}",
    params(("id" = u64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The removed todo item", body = Todo),
        (status = 404, description = "No todo with that id")
    )
)]
pub(crate) async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    db.write()
        .await
        .remove(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
