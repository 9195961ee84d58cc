//! When steps for tool invocation BDD scenarios.

use super::world::{ToolWorld, run_async, target};
use graphdesk::tool_invocation::{
    domain::ToolParams,
    services::{HealthMonitor, HealthProbe, ToolWorkflows, WorkflowTargets},
};
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use serde_json::json;
use std::sync::Arc;

#[when(r#"tool "{tool}" is called on "{name}" with query "{query}""#)]
fn call_tool(
    world: &mut ToolWorld,
    tool: String,
    name: String,
    query: String,
) -> Result<(), eyre::Report> {
    let target = target(&name)?;
    let mut params = ToolParams::new();
    params.insert("query".to_owned(), json!(query));
    let client = world.client();
    world.last_call = Some(run_async(client.call(&target, &tool, params)));
    Ok(())
}

#[when(r#"repository "{repo}" is synced"#)]
fn sync_repository(world: &mut ToolWorld, repo: String) {
    let workflows = ToolWorkflows::new(world.client(), WorkflowTargets::default());
    world.last_workflow = Some(run_async(workflows.sync_repo_state(&repo)));
}

#[when(r#"the test suite runs for project "{project}""#)]
fn run_test_suite(world: &mut ToolWorld, project: String) {
    let workflows = ToolWorkflows::new(world.client(), WorkflowTargets::default());
    world.last_workflow = Some(run_async(workflows.run_test_suite(&project)));
}

#[when("the health check runs")]
fn run_health_check(world: &mut ToolWorld) -> Result<(), eyre::Report> {
    let monitor = HealthMonitor::new(
        world.client(),
        Arc::new(DefaultClock),
        vec![HealthProbe::github(), HealthProbe::testsprite()],
    );
    run_async(monitor.connect_all()).map_err(|err| eyre::eyre!("connect_all failed: {err}"))?;
    world.last_report = Some(run_async(monitor.run()));
    Ok(())
}
