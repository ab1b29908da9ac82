use axum::{
    Json, Router,
    extract::State,
    middleware,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::db::{SchemaManager, Store};
use crate::handlers::{database, settings};
use crate::i18n::Baselines;
use crate::middleware::{AuthGate, RequireAdmin};
use crate::service::{BackupExporter, OverrideEngine, SettingsStore};

/// Shared application state; every component shares the same `Store`.
#[derive(Clone)]
pub struct DesignerState {
    pub store: Store,
    pub schema: SchemaManager,
    pub settings: SettingsStore,
    pub overrides: OverrideEngine,
    pub backup: BackupExporter,
    pub gate: Arc<dyn AuthGate>,
    /// Port the server is bound to, reported by the health check.
    pub port: u16,
}

impl DesignerState {
    pub fn new(
        store: Store,
        schema: SchemaManager,
        baselines: Baselines,
        backup_prefix: impl Into<String>,
        gate: Arc<dyn AuthGate>,
        port: u16,
    ) -> Self {
        let settings = SettingsStore::new(store.clone());
        let overrides = OverrideEngine::new(settings.clone(), Arc::new(baselines));
        let backup = BackupExporter::for_store(&store, backup_prefix);
        Self {
            store,
            schema,
            settings,
            overrides,
            backup,
            gate,
            port,
        }
    }
}

pub fn designer_router(state: DesignerState) -> Router {
    let admin = Router::new()
        .route("/smtp", get(settings::get_smtp).post(settings::put_smtp))
        .route(
            "/translations/{locale}",
            get(settings::get_translations)
                .post(settings::put_translations)
                .delete(settings::clear_translations),
        )
        .route(
            "/translations/{locale}/effective",
            get(settings::get_effective_translations),
        )
        .route("/db-status", get(database::db_status))
        .route("/db-backup", post(database::db_backup))
        .route("/db-reset", post(database::db_reset))
        .route_layer(middleware::from_extractor_with_state::<RequireAdmin, _>(
            state.clone(),
        ));

    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .nest("/api/settings", admin)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<DesignerState>) -> Json<Value> {
    Json(json!({ "status": "ok", "port": state.port }))
}
