//! Then steps for task definition creation BDD scenarios.

use super::world::{TaskDefinitionWorld, run_async};
use rstest_bdd_macros::then;
use taskdef::task_definition::{
    domain::{FailureKind, TaskDefinition},
    services::TaskDefinitionServiceError,
};

fn last_result(
    world: &TaskDefinitionWorld,
) -> Result<&Result<TaskDefinition, TaskDefinitionServiceError>, eyre::Report> {
    world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))
}

#[then(r#"creation succeeds with status "{status}""#)]
fn creation_succeeds(world: &TaskDefinitionWorld, status: String) -> Result<(), eyre::Report> {
    let created = last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("expected creation to succeed, got {err}"))?;
    if created.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            created.status()
        ));
    }
    Ok(())
}

#[then("the definition has a fresh identifier")]
fn fresh_identifier(world: &TaskDefinitionWorld) -> Result<(), eyre::Report> {
    let created = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no created definition in scenario world"))?;
    if created.id().into_inner().get_version_num() != 4 {
        return Err(eyre::eyre!(
            "expected a random identifier, got {}",
            created.id()
        ));
    }
    Ok(())
}

#[then(r#"creation fails with a duplicate name error for "{name}""#)]
fn creation_fails_with_duplicate(
    world: &TaskDefinitionWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    let Err(err) = result else {
        return Err(eyre::eyre!("expected duplicate name error, got {result:?}"));
    };
    if !matches!(err, TaskDefinitionServiceError::DuplicateActiveName(taken) if *taken == name) {
        return Err(eyre::eyre!("expected duplicate name error, got {err:?}"));
    }
    if err.kind() != FailureKind::BusinessRule {
        return Err(eyre::eyre!(
            "expected a business-rule failure, got {:?}",
            err.kind()
        ));
    }
    Ok(())
}

#[then(r#"creation fails with a validation error on "{field}""#)]
fn creation_fails_with_validation(
    world: &TaskDefinitionWorld,
    field: String,
) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    match result {
        Err(TaskDefinitionServiceError::InvalidCommand(violations))
            if violations.concerns(&field) =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected validation error on {field}, got {other:?}"
        )),
    }
}

#[then(r#"an active task definition named "{name}" exists"#)]
fn active_definition_exists(world: &TaskDefinitionWorld, name: String) -> Result<(), eyre::Report> {
    let exists = run_async(world.query.execute(&name))
        .map_err(|err| eyre::eyre!("existence query failed: {err}"))?;
    if !exists {
        return Err(eyre::eyre!("expected active definition '{name}' to exist"));
    }
    Ok(())
}

#[then(r#"no active task definition named "{name}" exists"#)]
fn no_active_definition_exists(
    world: &TaskDefinitionWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let exists = run_async(world.query.execute(&name))
        .map_err(|err| eyre::eyre!("existence query failed: {err}"))?;
    if exists {
        return Err(eyre::eyre!("expected no active definition '{name}'"));
    }
    Ok(())
}
