use axum::{
    Json,
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::DesignerError;
use crate::middleware::RequireAdmin;
use crate::router::DesignerState;

#[derive(Debug, Serialize)]
pub struct DbStatus {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub status: &'static str,
}

/// GET /api/settings/db-status
pub async fn db_status(State(state): State<DesignerState>) -> Json<DbStatus> {
    let status = if state.store.ping().await {
        "Connected"
    } else {
        "Disconnected"
    };
    Json(DbStatus {
        kind: "SQLite",
        status,
    })
}

/// POST /api/settings/db-backup -> the raw database file as a streamed attachment.
pub async fn db_backup(
    State(state): State<DesignerState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Response, DesignerError> {
    let artifact = state.backup.export().await?;
    info!(subject = %admin.subject, file = %artifact.file_name, "backup downloaded");

    let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/vnd.sqlite3".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Body::from_stream(artifact.into_stream()),
    )
        .into_response())
}

/// POST /api/settings/db-reset -> drop and re-seed everything.
pub async fn db_reset(
    State(state): State<DesignerState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Value>, DesignerError> {
    info!(subject = %admin.subject, "database reset requested");
    state
        .schema
        .reset()
        .await
        .map_err(|e| DesignerError::ResetFailed(Box::new(e)))?;
    Ok(Json(json!({ "message": "Database reset successfully" })))
}
