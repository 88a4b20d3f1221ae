//! In-memory integration tests for the task lifecycle.

use rstest::rstest;
use taskmaster::task::{domain::TaskId, services::TaskServiceError};

use super::helpers::{TestService, fields, january, service, validated};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_preserves_every_field(
    service: TestService,
) -> Result<(), eyre::Report> {
    let created = service.create(validated("Round trip")?).await?;

    let listed = service.list().await?;
    let found = listed
        .iter()
        .find(|task| task.id() == created.id())
        .ok_or_else(|| eyre::eyre!("created task missing from listing"))?;

    eyre::ensure!(found.title() == "Round trip", "title mismatch");
    eyre::ensure!(
        found.description() == "Round trip description",
        "description mismatch"
    );
    eyre::ensure!(found.due_date() == january(1), "due date mismatch");
    eyre::ensure!(!found.completed(), "completed should default to false");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_update_delete_lifecycle(service: TestService) -> Result<(), eyre::Report> {
    let created = service.create(validated("Draft")?).await?;
    let id = created.id().ok_or_else(|| eyre::eyre!("missing id"))?;

    let replacement = fields("Final").with_completed(true);
    let updated = service.update(id, replacement.clone()).await?;
    eyre::ensure!(updated.id() == Some(id), "identity changed");
    eyre::ensure!(updated.fields() == &replacement, "fields not replaced");

    let listed = service.list().await?;
    eyre::ensure!(listed == vec![updated], "listing should reflect update");

    service.delete(id).await?;
    eyre::ensure!(service.list().await?.is_empty(), "task should be gone");
    eyre::ensure!(service.find(id).await?.is_none(), "lookup should be empty");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_accepts_content_that_creation_would_reject(
    service: TestService,
) -> Result<(), eyre::Report> {
    let created = service.create(validated("Valid")?).await?;
    let id = created.id().ok_or_else(|| eyre::eyre!("missing id"))?;

    let updated = service.update(id, fields("   ")).await?;

    eyre::ensure!(updated.title() == "   ", "blank title should be stored as given");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_missing_id_leave_store_untouched(
    service: TestService,
) -> Result<(), eyre::Report> {
    let kept = service.create(validated("Kept")?).await?;
    let missing = TaskId::new(999)?;

    let update = service.update(missing, fields("Intruder")).await;
    let delete = service.delete(missing).await;

    eyre::ensure!(
        matches!(update, Err(TaskServiceError::NotFound { .. })),
        "update should be NotFound"
    );
    eyre::ensure!(
        matches!(delete, Err(TaskServiceError::NotFound { .. })),
        "delete should be NotFound"
    );
    eyre::ensure!(service.list().await? == vec![kept], "store changed");
    Ok(())
}
