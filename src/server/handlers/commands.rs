//! Command listing handler.

use axum::Json;
use serde::Serialize;

use crate::protocol::Kind;

/// Command kind information returned by the API.
#[derive(Debug, Serialize)]
pub struct CommandInfo {
    pub prefix: &'static str,
    pub name: &'static str,
}

/// Handle GET /api/commands - list every command kind the encoder supports.
pub async fn list() -> Json<Vec<CommandInfo>> {
    Json(
        Kind::ALL
            .into_iter()
            .map(|kind| CommandInfo {
                prefix: kind.prefix(),
                name: kind.name(),
            })
            .collect(),
    )
}
