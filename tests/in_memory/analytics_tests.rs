//! Dashboard and sprint report scenarios over the in-memory store.

use super::helpers::{TestTracker, create_integration, create_task, tracker, tracker_with};
use integration_tracker::{
    config::TrackerConfig,
    task::domain::{TaskPatch, TaskStatus},
    task::services::CreateTaskRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sprint_one_report_matches_completed_work(
    tracker: TestTracker,
) -> Result<(), eyre::Report> {
    let vd = create_integration(&tracker, "vd").await?;
    let done = tracker
        .tasks()
        .create_task(
            CreateTaskRequest::new(vd.clone(), "Shipped", "done work")
                .with_sprint("Sprint 1")
                .with_story_points(3),
        )
        .await?;
    tracker
        .tasks()
        .create_task(
            CreateTaskRequest::new(vd.clone(), "Queued", "pending work")
                .with_sprint("Sprint 1")
                .with_story_points(7),
        )
        .await?;
    tracker
        .tasks()
        .update_task(&vd, done.id(), TaskPatch::new().with_status(TaskStatus::Completed))
        .await?;

    let report = tracker.analytics().sprint_report().await?;
    let sprint = report
        .get("Sprint 1")
        .ok_or_else(|| eyre::eyre!("Sprint 1 missing from {report:?}"))?;

    eyre::ensure!(sprint.total_tasks == 2, "total tasks {}", sprint.total_tasks);
    eyre::ensure!(sprint.completed_tasks == 1, "completed {}", sprint.completed_tasks);
    eyre::ensure!(sprint.total_story_points == 10, "points {}", sprint.total_story_points);
    eyre::ensure!(
        sprint.completed_story_points == 3,
        "completed points {}",
        sprint.completed_story_points
    );
    eyre::ensure!(
        (sprint.completion_rate - 0.5).abs() < f64::EPSILON,
        "rate {}",
        sprint.completion_rate
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recent_updates_follow_latest_task_activity() -> Result<(), eyre::Report> {
    let tracker = tracker_with(TrackerConfig::default().with_recent_updates_limit(2));
    let alpha = create_integration(&tracker, "alpha").await?;
    let beta = create_integration(&tracker, "beta").await?;
    create_integration(&tracker, "gamma").await?;
    let alpha_task = create_task(&tracker, &alpha, "Alpha work", 1).await?;
    create_task(&tracker, &beta, "Beta work", 1).await?;
    tracker
        .tasks()
        .update_task(&alpha, alpha_task.id(), TaskPatch::new().with_title("Alpha rework"))
        .await?;

    let dashboard = tracker.analytics().dashboard().await?;
    let ranked: Vec<&str> = dashboard
        .recent_updates
        .iter()
        .map(|update| update.integration_id.as_str())
        .collect();

    eyre::ensure!(ranked == ["alpha", "beta"], "unexpected ranking {ranked:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn story_point_totals_stay_consistent(tracker: TestTracker) -> Result<(), eyre::Report> {
    let vd = create_integration(&tracker, "vd").await?;
    let first = create_task(&tracker, &vd, "First", 8).await?;
    create_task(&tracker, &vd, "Second", 13).await?;
    tracker
        .tasks()
        .update_task(&vd, first.id(), TaskPatch::new().with_status(TaskStatus::Completed))
        .await?;

    let dashboard = tracker.analytics().dashboard().await?;

    eyre::ensure!(
        dashboard.total_story_points
            == dashboard.completed_story_points + dashboard.remaining_story_points,
        "story points do not add up"
    );
    eyre::ensure!(dashboard.remaining_story_points == 13, "remaining points wrong");
    Ok(())
}
