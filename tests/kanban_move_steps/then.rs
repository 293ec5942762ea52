//! Then steps for Kanban move BDD scenarios.

use super::world::{KanbanMoveWorld, run_async};
use integration_tracker::{error::ErrorKind, task::domain::KanbanStatus};
use rstest_bdd_macros::then;

#[then(r#"the task is in the "{column}" column"#)]
fn task_is_in(world: &KanbanMoveWorld, column: String) -> Result<(), eyre::Report> {
    let expected = KanbanStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid expected column in scenario: {err}"))?;
    let (integration_id, task) = world.subject()?;

    let stored = run_async(world.tracker.tasks().get_task(&integration_id, task.id()))?;

    if stored.kanban_status() != expected {
        return Err(eyre::eyre!(
            "expected column {}, found {}",
            expected.as_str(),
            stored.kanban_status().as_str()
        ));
    }
    Ok(())
}

fn last_error_kind(world: &KanbanMoveWorld) -> Result<ErrorKind, eyre::Report> {
    match world.last_move_result.as_ref() {
        Some(Err(err)) => Ok(err.kind()),
        Some(Ok(status)) => Err(eyre::eyre!("expected the move to fail, it reached {status}")),
        None => Err(eyre::eyre!("missing move result")),
    }
}

#[then("the move fails at the board edge")]
fn move_fails_at_edge(world: &KanbanMoveWorld) -> Result<(), eyre::Report> {
    let kind = last_error_kind(world)?;
    eyre::ensure!(kind == ErrorKind::Boundary, "expected boundary error, got {kind:?}");
    Ok(())
}

#[then("the move fails validation")]
fn move_fails_validation(world: &KanbanMoveWorld) -> Result<(), eyre::Report> {
    let kind = last_error_kind(world)?;
    eyre::ensure!(kind == ErrorKind::Validation, "expected validation error, got {kind:?}");
    Ok(())
}
