//! Given steps for Kanban move BDD scenarios.

use super::world::{KanbanMoveWorld, run_async};
use eyre::WrapErr;
use integration_tracker::{
    board::services::MoveTaskRequest, integration::services::CreateIntegrationRequest,
    task::services::CreateTaskRequest,
};
use rstest_bdd_macros::given;

#[given(r#"an integration "{id}""#)]
fn an_integration(world: &mut KanbanMoveWorld, id: String) -> Result<(), eyre::Report> {
    let request = CreateIntegrationRequest::new(format!("{id} integration"), "Acme").with_id(id);
    let created = run_async(world.tracker.integrations().create_integration(request))
        .wrap_err("create integration for move scenario")?;
    world.integration_id = Some(created.id().clone());
    Ok(())
}

#[given(r#"a task titled "{title}" in that integration"#)]
fn a_task(world: &mut KanbanMoveWorld, title: String) -> Result<(), eyre::Report> {
    let integration_id = world
        .integration_id
        .clone()
        .ok_or_else(|| eyre::eyre!("missing integration in scenario world"))?;
    let request = CreateTaskRequest::new(integration_id, title, "Scenario task");
    let created = run_async(world.tracker.tasks().create_task(request))
        .wrap_err("create task for move scenario")?;
    world.task = Some(created);
    Ok(())
}

#[given(r#"the task has been placed in the "{column}" column"#)]
fn task_placed_in(world: &mut KanbanMoveWorld, column: String) -> Result<(), eyre::Report> {
    let (integration_id, task) = world.subject()?;
    run_async(world.tracker.board().move_task(MoveTaskRequest::to_column(
        integration_id,
        task.id().clone(),
        column,
    )))
    .wrap_err("place task in scenario setup")?;
    Ok(())
}
