use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::error::DesignerError;
use crate::router::DesignerState;
use crate::service::{Setting, SmtpConfig, TextMap};

/// Map axum's body rejection onto a stable validation error.
fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, DesignerError> {
    body.map(|Json(v)| v)
        .map_err(|rejection| DesignerError::Validation(rejection.body_text()))
}

/// GET /api/settings/smtp -> stored config, or `null` when never set.
pub async fn get_smtp(
    State(state): State<DesignerState>,
) -> Result<Json<Option<SmtpConfig>>, DesignerError> {
    Ok(Json(state.settings.load_smtp().await?))
}

/// POST /api/settings/smtp -> validates, replaces the stored config and echoes it.
pub async fn put_smtp(
    State(state): State<DesignerState>,
    body: Result<Json<SmtpConfig>, JsonRejection>,
) -> Result<Json<SmtpConfig>, DesignerError> {
    let cfg = payload(body)?;
    state.settings.save(&Setting::Smtp(cfg.clone())).await?;
    Ok(Json(cfg))
}

/// GET /api/settings/translations/{locale} -> stored overrides only.
pub async fn get_translations(
    State(state): State<DesignerState>,
    Path(locale): Path<String>,
) -> Result<Json<TextMap>, DesignerError> {
    Ok(Json(state.overrides.get_overrides(&locale).await?))
}

/// GET /api/settings/translations/{locale}/effective -> baseline with overrides applied.
pub async fn get_effective_translations(
    State(state): State<DesignerState>,
    Path(locale): Path<String>,
) -> Result<Json<TextMap>, DesignerError> {
    Ok(Json(state.overrides.get_effective(&locale).await?))
}

/// POST /api/settings/translations/{locale} -> persists and returns the minimal diff.
pub async fn put_translations(
    State(state): State<DesignerState>,
    Path(locale): Path<String>,
    body: Result<Json<TextMap>, JsonRejection>,
) -> Result<Json<TextMap>, DesignerError> {
    let submitted = payload(body)?;
    Ok(Json(state.overrides.set_overrides(&locale, &submitted).await?))
}

/// DELETE /api/settings/translations/{locale}
pub async fn clear_translations(
    State(state): State<DesignerState>,
    Path(locale): Path<String>,
) -> Result<StatusCode, DesignerError> {
    state.overrides.clear_overrides(&locale).await?;
    Ok(StatusCode::NO_CONTENT)
}
