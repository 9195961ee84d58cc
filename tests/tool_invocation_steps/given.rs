//! Given steps for tool invocation BDD scenarios.

use super::world::{FlakyBackend, ToolWorld, run_async, target};
use eyre::WrapErr;
use graphdesk::tool_invocation::adapters::{mock::MockToolBackend, select_backend};
use rstest_bdd_macros::given;
use serde_json::json;
use std::sync::Arc;

#[given(r#"the mock "{name}" target"#)]
fn mock_target(world: &mut ToolWorld, name: String) -> Result<(), eyre::Report> {
    let backend = select_backend(target(&name)?, None, &reqwest::Client::new());
    world.backends.push(backend);
    Ok(())
}

#[given(r#"a "{name}" target that fails {failures:u32} times before answering"#)]
fn flaky_target(world: &mut ToolWorld, name: String, failures: u32) -> Result<(), eyre::Report> {
    let backend = FlakyBackend::new(target(&name)?, failures, Arc::clone(&world.calls));
    world.backends.push(Arc::new(backend));
    Ok(())
}

#[given(r#"a "{name}" target whose "{tool}" tool requires "{param}""#)]
fn strict_target(
    world: &mut ToolWorld,
    name: String,
    tool: String,
    param: String,
) -> Result<(), eyre::Report> {
    let backend = MockToolBackend::new(target(&name)?).with_required_tool(
        tool,
        [param],
        json!({"status": "ready"}),
    );
    world.backends.push(Arc::new(backend));
    Ok(())
}

#[given(r#"target "{name}" is connected"#)]
fn target_connected(world: &mut ToolWorld, name: String) -> Result<(), eyre::Report> {
    let target = target(&name)?;
    let client = world.client();
    run_async(client.connect(&target)).wrap_err("connect target for scenario")?;
    Ok(())
}
