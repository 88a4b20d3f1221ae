//! Contract tests for the in-memory task repository.

use std::sync::Arc;

use rstest::rstest;
use taskmaster::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PersistedTaskData, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

use super::helpers::{fields, repository};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_assigns_sequential_ids(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let first = repository.save(&Task::new(fields("one"))).await?;
    let second = repository.save(&Task::new(fields("two"))).await?;

    eyre::ensure!(first.id().map(TaskId::value) == Some(1), "first id should be 1");
    eyre::ensure!(second.id().map(TaskId::value) == Some(2), "second id should be 2");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_ids_are_not_reused(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let first = repository.save(&Task::new(fields("one"))).await?;
    let first_id = first.id().ok_or_else(|| eyre::eyre!("missing id"))?;
    repository.delete_by_id(first_id).await?;

    let second = repository.save(&Task::new(fields("two"))).await?;

    eyre::ensure!(second.id() != Some(first_id), "id {first_id} was reused");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_returns_tasks_in_id_order(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    for title in ["c", "a", "b"] {
        repository.save(&Task::new(fields(title))).await?;
    }

    let titles: Vec<String> = repository
        .find_all()
        .await?
        .iter()
        .map(|task| task.title().to_owned())
        .collect();

    eyre::ensure!(titles == ["c", "a", "b"], "unexpected order: {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_with_unknown_id_is_not_found(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let id = TaskId::new(42)?;
    let ghost = Task::from_persisted(PersistedTaskData {
        id,
        fields: fields("ghost"),
    });

    let result = repository.save(&ghost).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(missing)) if missing == id),
        "expected NotFound for {id}"
    );
    eyre::ensure!(
        repository.find_all().await?.is_empty(),
        "store should stay empty"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_with_unknown_id_is_not_found(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let result = repository.delete_by_id(TaskId::new(7)?).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(_))),
        "expected NotFound"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_storage(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let clone = InMemoryTaskRepository::clone(&repository);
    let saved = clone.save(&Task::new(fields("shared"))).await?;
    let id = saved.id().ok_or_else(|| eyre::eyre!("missing id"))?;

    eyre::ensure!(
        repository.exists_by_id(id).await?,
        "clone should share state"
    );
    Ok(())
}
