//! Runs the task HTTP server.
//!
//! Usage:
//!
//! ```text
//! TASKMASTER_DATABASE_URL=postgres://localhost/tasks taskmaster
//! ```
//!
//! Configuration is read from the environment (see
//! [`taskmaster::config`]). Without `TASKMASTER_DATABASE_URL` the server
//! keeps tasks in memory.

use std::sync::Arc;

use taskmaster::config::ServerConfig;
use taskmaster::observability::init_logging;
use taskmaster::task::adapters::http::{TaskApiState, task_router};
use taskmaster::task::adapters::memory::InMemoryTaskRepository;
use taskmaster::task::adapters::postgres::PostgresTaskRepository;
use taskmaster::task::ports::TaskRepository;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::from_env()?;
    init_logging(config.log_format);
    tracing::debug!(?config, "loaded configuration");

    let repository = build_repository(&config).await?;
    let state = TaskApiState::from_repository(repository);
    let router = task_router(state, &config.base_path);

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        base_path = %config.base_path,
        "task server listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("task server stopped");
    Ok(())
}

async fn build_repository(config: &ServerConfig) -> Result<Arc<dyn TaskRepository>, BoxError> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("TASKMASTER_DATABASE_URL not set; using in-memory task storage");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };

    let repository = PostgresTaskRepository::connect(url, config.db_pool_size)?;
    repository.ensure_schema().await?;
    tracing::info!(pool_size = config.db_pool_size, "using PostgreSQL task storage");
    Ok(Arc::new(repository))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
