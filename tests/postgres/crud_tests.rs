//! Repository operations against `PostgreSQL`.
//!
//! The database may be shared with other tests, so assertions work on the
//! rows each test created rather than on table totals.

use rstest::rstest;
use taskmaster::task::{
    domain::{PersistedTaskData, Task},
    ports::{TaskRepository, TaskRepositoryError},
};

use super::helpers::{connect, database_url, fields, new_task};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_assigns_id_and_round_trips_fields(
    database_url: Option<String>,
) -> Result<(), eyre::Report> {
    let Some(repository) = connect(database_url).await? else {
        return Ok(());
    };

    let saved = repository.save(&new_task("pg round trip")).await?;
    let id = saved.id().ok_or_else(|| eyre::eyre!("missing id"))?;
    let found = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("saved task not found"))?;

    eyre::ensure!(found == saved, "stored task differs from saved task");
    eyre::ensure!(
        repository.find_all().await?.contains(&saved),
        "listing should include saved task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_of_persisted_task_replaces_row(
    database_url: Option<String>,
) -> Result<(), eyre::Report> {
    let Some(repository) = connect(database_url).await? else {
        return Ok(());
    };

    let mut task = repository.save(&new_task("pg before")).await?;
    task.replace_fields(fields("pg after").with_completed(true));
    let updated = repository.save(&task).await?;

    eyre::ensure!(updated == task, "update should return the replaced task");
    let id = task.id().ok_or_else(|| eyre::eyre!("missing id"))?;
    let found = repository.find_by_id(id).await?;
    eyre::ensure!(found.as_ref() == Some(&task), "row was not replaced");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_of_vanished_row_is_not_found(
    database_url: Option<String>,
) -> Result<(), eyre::Report> {
    let Some(repository) = connect(database_url).await? else {
        return Ok(());
    };

    let saved = repository.save(&new_task("pg vanished")).await?;
    let id = saved.id().ok_or_else(|| eyre::eyre!("missing id"))?;
    repository.delete_by_id(id).await?;

    let ghost = Task::from_persisted(PersistedTaskData {
        id,
        fields: fields("pg ghost"),
    });
    let result = repository.save(&ghost).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(missing)) if missing == id),
        "expected NotFound for {id}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_row_and_reports_missing(
    database_url: Option<String>,
) -> Result<(), eyre::Report> {
    let Some(repository) = connect(database_url).await? else {
        return Ok(());
    };

    let saved = repository.save(&new_task("pg delete")).await?;
    let id = saved.id().ok_or_else(|| eyre::eyre!("missing id"))?;

    eyre::ensure!(repository.exists_by_id(id).await?, "row should exist");
    repository.delete_by_id(id).await?;
    eyre::ensure!(!repository.exists_by_id(id).await?, "row should be gone");

    let again = repository.delete_by_id(id).await;
    eyre::ensure!(
        matches!(again, Err(TaskRepositoryError::NotFound(_))),
        "second delete should be NotFound"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlong_title_is_a_persistence_error(
    database_url: Option<String>,
) -> Result<(), eyre::Report> {
    let Some(repository) = connect(database_url).await? else {
        return Ok(());
    };

    let result = repository.save(&new_task(&"x".repeat(101))).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::Persistence(_))),
        "column limit should surface as a persistence error"
    );
    Ok(())
}
