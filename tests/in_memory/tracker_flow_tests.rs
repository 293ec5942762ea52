//! End-to-end flows through the tracker facade.

use super::helpers::{TestTracker, create_integration, create_task, tracker};
use integration_tracker::{
    board::{domain::MoveDirection, services::MoveTaskRequest},
    error::ErrorKind,
    integration::domain::{IntegrationFilter, WorkflowStage},
    integration::services::{CreateIntegrationRequest, UpdateStageRequest},
    task::domain::{KanbanStatus, Priority, TaskPatch},
    task::services::CreateTaskRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn vd_task_walks_the_board_to_blocked(tracker: TestTracker) -> Result<(), eyre::Report> {
    let vd = create_integration(&tracker, "vd").await?;
    let task = tracker
        .tasks()
        .create_task(
            CreateTaskRequest::new(vd.clone(), "Task A", "Dealer feed")
                .with_story_points(5)
                .with_priority(Priority::High),
        )
        .await?;

    let dashboard = tracker.analytics().dashboard().await?;
    eyre::ensure!(dashboard.total_story_points == 5, "story points not counted");
    eyre::ensure!(dashboard.high_priority_tasks == 1, "high priority not counted");
    eyre::ensure!(dashboard.active_tasks == 1, "active task not counted");

    let step = || MoveTaskRequest::step(vd.clone(), task.id().clone(), MoveDirection::Right);
    let first = tracker.board().move_task(step()).await?;
    eyre::ensure!(first == KanbanStatus::Todo, "first move landed in {first}");
    let mut current = first;
    for _ in 0..5 {
        current = tracker.board().move_task(step()).await?;
    }
    eyre::ensure!(current == KanbanStatus::Blocked, "walk ended in {current}");

    let err = tracker
        .board()
        .move_task(step())
        .await
        .expect_err("right edge reached");
    let stored = tracker.tasks().get_task(&vd, task.id()).await?;

    eyre::ensure!(err.kind() == ErrorKind::Boundary, "unexpected kind {:?}", err.kind());
    eyre::ensure!(
        stored.kanban_status() == KanbanStatus::Blocked,
        "task moved past the edge"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_integration_clears_dashboard_and_board(
    tracker: TestTracker,
) -> Result<(), eyre::Report> {
    let vd = create_integration(&tracker, "vd").await?;
    let keep = create_integration(&tracker, "keep").await?;
    create_task(&tracker, &vd, "Doomed", 3).await?;
    create_task(&tracker, &keep, "Survivor", 2).await?;

    tracker.integrations().delete_integration(&vd).await?;

    let dashboard = tracker.analytics().dashboard().await?;
    let board = tracker.board().get_board(&vd, None).await;

    eyre::ensure!(dashboard.total_tasks == 1, "deleted tasks still counted");
    eyre::ensure!(dashboard.total_story_points == 2, "deleted points still counted");
    eyre::ensure!(
        board.is_err_and(|err| err.kind() == ErrorKind::NotFound),
        "board of deleted integration still served"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_moves_reach_any_column_and_return(
    tracker: TestTracker,
) -> Result<(), eyre::Report> {
    let vd = create_integration(&tracker, "vd").await?;
    let task = create_task(&tracker, &vd, "Round trip", 1).await?;

    for column in ["done", "backlog", "blocked", "in_review"] {
        let moved = tracker
            .board()
            .move_task(MoveTaskRequest::to_column(vd.clone(), task.id().clone(), column))
            .await?;
        eyre::ensure!(moved.as_str() == column, "expected {column}, got {moved}");
    }

    let board = tracker.board().get_board(&vd, None).await?;
    eyre::ensure!(
        board
            .column(KanbanStatus::InReview)
            .is_some_and(|column| column.tasks.len() == 1),
        "task missing from in_review column"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_sprint_filter_matches_exact_labels(
    tracker: TestTracker,
) -> Result<(), eyre::Report> {
    let vd = create_integration(&tracker, "vd").await?;
    for (title, sprint) in [("One", "Sprint 1"), ("Two", "Sprint 2"), ("Three", "Sprint 1")] {
        tracker
            .tasks()
            .create_task(
                CreateTaskRequest::new(vd.clone(), title, "details").with_sprint(sprint),
            )
            .await?;
    }

    let board = tracker.board().get_board(&vd, Some("Sprint 1")).await?;
    let titles: Vec<&str> = board
        .columns
        .iter()
        .flat_map(|column| column.tasks.iter().map(|task| task.title()))
        .collect();

    eyre::ensure!(titles == ["One", "Three"], "unexpected tasks {titles:?}");
    eyre::ensure!(board.total_tasks == 2, "total does not match filter");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn catalogue_flow_updates_stage_and_lists(tracker: TestTracker) -> Result<(), eyre::Report> {
    let created = tracker
        .integrations()
        .create_integration(CreateIntegrationRequest::new("Vision Dealer", "Vision Automotive"))
        .await?;
    tracker
        .integrations()
        .update_stage(UpdateStageRequest::new(
            created.id().clone(),
            WorkflowStage::Testing,
        ))
        .await?;

    let testing = tracker
        .integrations()
        .list_integrations(&IntegrationFilter::new().with_stage(WorkflowStage::Testing))
        .await?;
    let research = tracker
        .integrations()
        .list_integrations(&IntegrationFilter::new().with_stage(WorkflowStage::Research))
        .await?;

    eyre::ensure!(testing.len() == 1, "stage change not visible in listing");
    eyre::ensure!(research.is_empty(), "stale stage still listed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_and_updates_persist_together(tracker: TestTracker) -> Result<(), eyre::Report> {
    let vd = create_integration(&tracker, "vd").await?;
    let task = create_task(&tracker, &vd, "Feed", 2).await?;

    tracker
        .tasks()
        .add_comment(&vd, task.id(), "ana", "Waiting on credentials")
        .await?;
    tracker
        .tasks()
        .update_task(&vd, task.id(), TaskPatch::new().with_assigned_to("ben"))
        .await?;
    let stored = tracker.tasks().get_task(&vd, task.id()).await?;

    eyre::ensure!(stored.comments().len() == 1, "comment lost by later update");
    eyre::ensure!(stored.assigned_to() == Some("ben"), "assignee not stored");
    eyre::ensure!(stored.updated_at() > task.updated_at(), "updated_at not advanced");
    Ok(())
}
