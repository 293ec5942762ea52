//! Parallel mutations through one shared tracker.

use super::helpers::{TestTracker, create_integration, create_task, tracker};
use integration_tracker::{
    board::{domain::MoveDirection, services::MoveTaskRequest},
    task::domain::KanbanStatus,
    task::services::CreateTaskRequest,
};
use rstest::rstest;
use std::collections::BTreeSet;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parallel_moves_never_lose_a_step(tracker: TestTracker) -> Result<(), eyre::Report> {
    let tracker = Arc::new(tracker);
    let vd = create_integration(&tracker, "vd").await?;
    let task = create_task(&tracker, &vd, "Contended", 1).await?;

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let shared = Arc::clone(&tracker);
            let request = MoveTaskRequest::step(vd.clone(), task.id().clone(), MoveDirection::Right);
            tokio::spawn(async move { shared.board().move_task(request).await })
        })
        .collect();
    let mut reached = BTreeSet::new();
    for handle in handles {
        reached.insert(handle.await??);
    }

    let stored = tracker.tasks().get_task(&vd, task.id()).await?;
    eyre::ensure!(reached.len() == 5, "two moves observed the same column");
    eyre::ensure!(stored.kanban_status() == KanbanStatus::Done, "final column wrong");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parallel_creates_get_distinct_ids(tracker: TestTracker) -> Result<(), eyre::Report> {
    let tracker = Arc::new(tracker);
    let vd = create_integration(&tracker, "vd").await?;

    let handles: Vec<_> = (0..10)
        .map(|index| {
            let shared = Arc::clone(&tracker);
            let request =
                CreateTaskRequest::new(vd.clone(), format!("Task {index}"), "parallel create");
            tokio::spawn(async move { shared.tasks().create_task(request).await })
        })
        .collect();
    let mut ids = BTreeSet::new();
    for handle in handles {
        ids.insert(handle.await??.id().as_str().to_owned());
    }

    let integration = tracker.integrations().get_integration(&vd).await?;
    eyre::ensure!(ids.len() == 10, "duplicate task ids issued");
    eyre::ensure!(integration.tasks().len() == 10, "a create was lost");
    eyre::ensure!(ids.contains("vd-010"), "sequence skipped numbers: {ids:?}");
    Ok(())
}
