use lightsail_api::config::{Config, LISTEN_ADDR};
use lightsail_api::router::{AppState, app_router};
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

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

    let db = &cfg.database;
    info!(
        pghost = %db.host.as_deref().unwrap_or("<unset>"),
        pgport = %db.port.as_deref().unwrap_or("<unset>"),
        pgdatabase = %db.dbname.as_deref().unwrap_or("<unset>"),
        pguser = %db.user.as_deref().unwrap_or("<unset>"),
        pgsslmode = %db.sslmode.as_deref().unwrap_or("<unset>"),
        loglevel = %cfg.loglevel,
        "starting"
    );

    let state = AppState::from_config(&cfg);
    match state.storage() {
        Ok(storage) if cfg.init_schema => match storage.init_schema().await {
            Ok(()) => info!("database schema ready"),
            Err(e) => warn!(error = %e, "schema initialization failed; continuing"),
        },
        Ok(_) => {}
        Err(e) => warn!(error = %e, "database routes will fail until configuration is fixed"),
    }

    let app = app_router(state);

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    info!("HTTP server listening on {}", LISTEN_ADDR);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
