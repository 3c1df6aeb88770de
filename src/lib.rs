//! Versioned CRUD HTTP API for a todo-item list.
//!
//! # Overview
//! A thin routing and persistence layer over a single entity type: six
//! handlers under `/todoitems`, an in-memory process-lifetime store, and a
//! version negotiation middleware (1.0 deprecated, 1.1 current) selected
//! via the `X-Version` header.
//!
//! # Design
//! - The store is injected into handlers through axum `State` — no globals.
//! - Version sets per route live in a static table (`version::ROUTE_VERSIONS`)
//!   consulted by the negotiation middleware.
//! - The OpenAPI document is mounted only outside production.

pub mod config;
pub mod docs;
pub mod model;
pub mod routes;
pub mod store;
pub mod version;

pub use config::{AppEnv, Config};
pub use model::{Todo, TodoInput};
pub use store::{Db, TodoStore};
pub use version::ApiVersion;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub fn app(config: &Config) -> Router {
    let db: Db = Arc::new(RwLock::new(TodoStore::new()));

    // Routes registered before the negotiate layer are versioned; the docs
    // route added afterwards is not.
    let mut router = Router::new()
        .route(
            "/todoitems",
            get(routes::list_todos).post(routes::create_todo),
        )
        .route("/todoitems/complete", get(routes::list_complete))
        .route(
            "/todoitems/{id}",
            get(routes::get_todo)
                .put(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .layer(middleware::from_fn(version::negotiate))
        .with_state(db);

    if config.env != AppEnv::Production {
        router = router.route("/api-docs/openapi.json", get(docs::openapi_json));
    }

    router.layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(&config)).await
}
