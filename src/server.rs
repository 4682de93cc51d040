//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, outbound clients, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{
    NotificationService, RetentionService, TranslationService, VideoTranslationService,
};
use crate::config::Config;
use crate::infrastructure::messaging::FcmSender;
use crate::infrastructure::persistence::{
    PgArticleRepository, PgTokenRepository, PgTranslationRepository,
};
use crate::infrastructure::translate::GoogleTranslator;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Opens the connection pool and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Builds every service from the configuration and an open pool.
///
/// # Errors
///
/// Returns an error if the translation endpoint is not a valid URL or the
/// service-account key cannot be loaded.
pub fn build_state(config: &Config, pool: PgPool) -> Result<AppState> {
    let pool = Arc::new(pool);

    let article_repository = Arc::new(PgArticleRepository::new(pool.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));
    let translation_repository = Arc::new(PgTranslationRepository::new(pool));

    let translator = GoogleTranslator::new(&config.translate_endpoint, config.translate_timeout())
        .context("Failed to build translation client")?;

    let account = config.service_account()?;
    let sender = FcmSender::new(account, config.translate_timeout())
        .context("Failed to build push sender")?;
    tracing::info!(project_id = sender.project_id(), "Push sender ready");

    let translation_service = Arc::new(TranslationService::new(
        Arc::new(translator),
        config.fanout_languages.clone(),
        config.supported_languages.clone(),
        config.translate_pause(),
    ));

    let video_translation_service = Arc::new(VideoTranslationService::new(
        translation_service.clone(),
        translation_repository,
    ));

    let notification_service = Arc::new(NotificationService::new(
        article_repository.clone(),
        token_repository,
        Arc::new(sender),
        config.notify_batch_size,
        config.notify_body_chars,
    ));

    let retention_service = Arc::new(RetentionService::new(
        article_repository.clone(),
        config.retention_window(),
        config.retention_strategy,
    ));

    Ok(AppState::new(
        translation_service,
        video_translation_service,
        notification_service,
        retention_service,
        article_repository,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Translation and push clients
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - An outbound client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    let state = build_state(&config, pool)?;

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(async {
        if let Err(e) = shutdown_signal().await {
            tracing::error!("Error while waiting for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received, draining requests");
    })
    .await?;

    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
