//! Shared test helpers for `PostgreSQL` integration tests.

use chrono::NaiveDate;
use rstest::fixture;
use taskmaster::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{Task, TaskFields},
};

/// Environment variable naming the database used by these tests.
pub const TEST_DATABASE_URL_VAR: &str = "TASKMASTER_TEST_DATABASE_URL";

/// Connection settings for the test database, if configured.
#[fixture]
pub fn database_url() -> Option<String> {
    std::env::var(TEST_DATABASE_URL_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Connects to the test database and applies the schema.
///
/// Returns `Ok(None)` when no database is configured.
///
/// # Errors
///
/// Returns an error when a configured database cannot be reached or the
/// schema cannot be applied.
pub async fn connect(
    database_url: Option<String>,
) -> Result<Option<PostgresTaskRepository>, eyre::Report> {
    let Some(url) = database_url else {
        eprintln!("SKIP-TEST-POSTGRES: {TEST_DATABASE_URL_VAR} is not set");
        return Ok(None);
    };
    let repository = PostgresTaskRepository::connect(&url, 2)?;
    repository.ensure_schema().await?;
    Ok(Some(repository))
}

/// Builds an unsaved task with a title unique to the calling test.
pub fn new_task(title: &str) -> Task {
    Task::new(fields(title))
}

/// Builds content fields for `title`.
pub fn fields(title: &str) -> TaskFields {
    TaskFields::new(
        title,
        format!("{title} description"),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
    )
}
