//! Given steps for task definition creation BDD scenarios.

use super::world::{TaskDefinitionWorld, build_command, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdef::task_definition::{domain::TaskDefinition, services::HttpConfigCommand};

#[given(r#"a create command named "{name}" in category "{category}""#)]
fn a_create_command(world: &mut TaskDefinitionWorld, name: String, category: String) {
    world.pending_command = Some(build_command(&name, &category));
}

#[given("the command timeout is {seconds:i64} seconds")]
fn command_timeout(world: &mut TaskDefinitionWorld, seconds: i64) -> Result<(), eyre::Report> {
    let command = world.pending()?;
    let endpoint = command
        .http_config
        .as_ref()
        .and_then(|http| http.endpoint.clone())
        .ok_or_else(|| eyre::eyre!("pending command has no endpoint"))?;
    command.http_config = Some(HttpConfigCommand::new(endpoint, "POST", seconds));
    Ok(())
}

#[given("the command has already been submitted")]
fn command_already_submitted(world: &mut TaskDefinitionWorld) -> Result<(), eyre::Report> {
    let command = world.pending()?.clone();
    let created = run_async(world.service.create(&command))
        .wrap_err("create existing definition for scenario")?;
    world.last_created = Some(created);
    Ok(())
}

#[given("the created definition is deactivated")]
fn created_definition_deactivated(world: &mut TaskDefinitionWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_created
        .as_ref()
        .map(TaskDefinition::id)
        .ok_or_else(|| eyre::eyre!("no created definition to deactivate"))?;
    run_async(world.service.deactivate(id)).wrap_err("deactivate definition for scenario")?;
    Ok(())
}
