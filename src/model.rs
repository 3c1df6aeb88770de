//! Domain types for the todo API.
//!
//! # Design
//! `Todo` is the stored record; `TodoInput` is the client-supplied payload
//! for both create and update. Keeping them separate means a client can
//! never smuggle an `id` past the store — unknown fields in the input are
//! simply dropped during deserialization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single todo item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Assigned by the store on creation, immutable afterwards.
    pub id: u64,
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

/// Payload for creating or replacing a todo. Any `id` sent by the client
/// is ignored; identity always comes from the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}
