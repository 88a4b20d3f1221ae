//! Task lifecycle over the `PostgreSQL` adapter.

use std::sync::Arc;

use rstest::rstest;
use taskmaster::task::{
    domain::TaskId,
    services::{TaskService, TaskServiceError},
    validation::{CreateTaskRequest, validate_create_request},
};

use super::helpers::{connect, database_url, fields};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_update_delete_lifecycle(
    database_url: Option<String>,
) -> Result<(), eyre::Report> {
    let Some(repository) = connect(database_url).await? else {
        return Ok(());
    };
    let service = TaskService::new(Arc::new(repository));

    let request = CreateTaskRequest::new("pg lifecycle", "service flow")
        .with_due_date(fields("pg lifecycle").due_date);
    let validated = validate_create_request(request).map_err(|err| eyre::eyre!("{err}"))?;
    let created = service.create(validated).await?;
    let id = created.id().ok_or_else(|| eyre::eyre!("missing id"))?;

    let updated = service
        .update(id, fields("pg lifecycle done").with_completed(true))
        .await?;
    eyre::ensure!(updated.id() == Some(id), "identity changed");
    eyre::ensure!(updated.completed(), "completion flag not stored");

    service.delete(id).await?;
    let again = service.delete(id).await;
    eyre::ensure!(
        matches!(&again, Err(TaskServiceError::NotFound { message, .. })
            if *message == format!("Task with ID {id} not found")),
        "unexpected second delete outcome: {again:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_task_is_not_found(
    database_url: Option<String>,
) -> Result<(), eyre::Report> {
    let Some(repository) = connect(database_url).await? else {
        return Ok(());
    };
    let service = TaskService::new(Arc::new(repository));

    let result = service
        .update(TaskId::new(i64::MAX)?, fields("pg missing"))
        .await;

    eyre::ensure!(
        matches!(
            &result,
            Err(TaskServiceError::NotFound { message, .. }) if message == "Task not found"
        ),
        "unexpected outcome: {result:?}"
    );
    Ok(())
}
