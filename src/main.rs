use anyhow::Result;
use scribe_core::application::services::ApplicationServices;
use scribe_core::config::{AppConfig, StoreBackend};
use scribe_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use scribe_core::infrastructure::{
    database,
    repositories::{InMemoryArticleRepository, PostgresArticleRepository},
};
use scribe_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let (article_write_repo, article_read_repo) = build_repositories(&config).await?;

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
    ));
    let state = HttpState::new(services);

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn ArticleWriteRepository>, Arc<dyn ArticleReadRepository>)> {
    match config.store_backend() {
        StoreBackend::Postgres => {
            let pool =
                database::init_pool(config.database_url(), config.database_max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres article store");

            let repo = Arc::new(PostgresArticleRepository::new(pool));
            let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
            let read_repo: Arc<dyn ArticleReadRepository> = repo;
            Ok((write_repo, read_repo))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory article store; data is lost on shutdown");
            let repo = Arc::new(InMemoryArticleRepository::new());
            let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
            let read_repo: Arc<dyn ArticleReadRepository> = repo;
            Ok((write_repo, read_repo))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
