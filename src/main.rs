use backon::{ExponentialBuilder, Retryable};
use mimalloc::MiMalloc;
use pol_designer::db::{SchemaManager, SeedAdmin, Store};
use pol_designer::i18n::Baselines;
use pol_designer::middleware::StaticKeyGate;
use pol_designer::router::{DesignerState, designer_router};
use pol_designer::service::Argon2Hasher;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &pol_designer::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_path = %cfg.database_path.display(),
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        seed_admin = %cfg.seed_admin_email
    );
    if cfg.admin_key == "changeme" {
        warn!("POL_ADMIN_KEY is unset; using the default admin key");
    }

    // Opening is non-destructive, so transient failures are retried.
    let retry_policy = ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(250))
        .with_max_delay(Duration::from_secs(3))
        .with_max_times(cfg.connect_retries)
        .with_jitter();
    let store = (|| Store::open(&cfg.database_path))
        .retry(retry_policy)
        .notify(|err, after| {
            warn!(error = %err, retry_in = ?after, "failed to open database; retrying");
        })
        .await?;

    let schema = SchemaManager::new(
        store.clone(),
        Arc::new(Argon2Hasher),
        SeedAdmin {
            email: cfg.seed_admin_email.clone(),
            password: cfg.seed_admin_password.clone(),
        },
    );
    schema.initialize().await?;

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    let port = listener.local_addr()?.port();

    let gate = Arc::new(StaticKeyGate::new(cfg.admin_key.as_str()));
    let state = DesignerState::new(
        store,
        schema,
        Baselines::builtin(),
        cfg.backup_prefix.clone(),
        gate,
        port,
    );
    let app = designer_router(state);

    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
