//! When steps for Kanban move BDD scenarios.

use super::world::{KanbanMoveWorld, run_async};
use integration_tracker::board::services::MoveTaskRequest;
use rstest_bdd_macros::when;

#[when(r#"the task is moved "{direction}""#)]
fn task_moved(world: &mut KanbanMoveWorld, direction: String) -> Result<(), eyre::Report> {
    let (integration_id, task) = world.subject()?;
    let request = MoveTaskRequest::step_named(integration_id, task.id().clone(), direction);
    world.last_move_result = Some(run_async(world.tracker.board().move_task(request)));
    Ok(())
}

#[when(r#"the task is sent to the "{column}" column"#)]
fn task_sent_to(world: &mut KanbanMoveWorld, column: String) -> Result<(), eyre::Report> {
    let (integration_id, task) = world.subject()?;
    let request = MoveTaskRequest::to_column(integration_id, task.id().clone(), column);
    world.last_move_result = Some(run_async(world.tracker.board().move_task(request)));
    Ok(())
}
