//! Then steps for tool invocation BDD scenarios.

use super::world::{BACKOFF_UNIT, ToolWorld, target};
use graphdesk::tool_invocation::{
    domain::ToolResult,
    services::{HealthReport, ToolInvocationError},
};
use rstest_bdd_macros::then;
use serde_json::Value;
use std::sync::atomic::Ordering;
use std::time::Duration;

fn last_result(world: &ToolWorld) -> Result<&ToolResult, eyre::Report> {
    match world.last_call.as_ref() {
        Some(Ok(result)) => Ok(result),
        Some(Err(err)) => Err(eyre::eyre!("call raised an error: {err}")),
        None => Err(eyre::eyre!("no call recorded in scenario world")),
    }
}

fn last_report(world: &ToolWorld) -> Result<&HealthReport, eyre::Report> {
    world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no health report in scenario world"))
}

#[then("the call succeeds")]
fn call_succeeds(world: &ToolWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !result.is_success() {
        return Err(eyre::eyre!("expected success, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the call fails with "{message}""#)]
fn call_fails_with(world: &ToolWorld, message: String) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if result.is_success() || result.error() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected failure '{message}', got {result:?}"));
    }
    Ok(())
}

#[then(r#"the call is rejected because "{name}" is not connected"#)]
fn call_rejected_not_connected(world: &ToolWorld, name: String) -> Result<(), eyre::Report> {
    let expected = target(&name)?;
    match world.last_call.as_ref() {
        Some(Err(ToolInvocationError::NotConnected(actual))) if *actual == expected => Ok(()),
        other => Err(eyre::eyre!("expected not-connected error, got {other:?}")),
    }
}

#[then("no backoff delay was recorded")]
fn no_backoff(world: &ToolWorld) -> Result<(), eyre::Report> {
    let delays = world.sleeper.recorded();
    if !delays.is_empty() {
        return Err(eyre::eyre!("expected no delays, got {delays:?}"));
    }
    Ok(())
}

#[then("the backend was called {count:u32} times")]
fn backend_called(world: &ToolWorld, count: u32) -> Result<(), eyre::Report> {
    let calls = world.calls.load(Ordering::SeqCst);
    if calls != count {
        return Err(eyre::eyre!("expected {count} attempts, saw {calls}"));
    }
    Ok(())
}

#[then("the recorded backoff delays are {first:u64} then {second:u64} milliseconds")]
fn backoff_delays(world: &ToolWorld, first: u64, second: u64) -> Result<(), eyre::Report> {
    let expected = vec![Duration::from_millis(first), Duration::from_millis(second)];
    let delays = world.sleeper.recorded();
    if delays != expected {
        return Err(eyre::eyre!(
            "expected delays {expected:?} (unit {BACKOFF_UNIT:?}), got {delays:?}"
        ));
    }
    Ok(())
}

#[then(r#"the workflow fails with "{message}""#)]
fn workflow_fails(world: &ToolWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_workflow.as_ref() {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected workflow failure '{message}', got {other:?}")),
    }
}

#[then(r#"the workflow returns plan "{plan_id}""#)]
fn workflow_returns_plan(world: &ToolWorld, plan_id: String) -> Result<(), eyre::Report> {
    let plan = match world.last_workflow.as_ref() {
        Some(Ok(plan)) => plan,
        other => return Err(eyre::eyre!("expected a plan, got {other:?}")),
    };
    if plan.get("plan_id").and_then(Value::as_str) != Some(plan_id.as_str()) {
        return Err(eyre::eyre!("expected plan '{plan_id}', got {plan}"));
    }
    Ok(())
}

#[then(r#"target "{name}" is reported "{status}""#)]
fn target_reported(world: &ToolWorld, name: String, status: String) -> Result<(), eyre::Report> {
    let expected = target(&name)?;
    let outcome = last_report(world)?
        .outcomes
        .iter()
        .find(|outcome| outcome.target == expected)
        .ok_or_else(|| eyre::eyre!("no outcome for '{name}'"))?;
    if outcome.status.to_string() != status {
        return Err(eyre::eyre!(
            "expected '{name}' to be {status}, got {}",
            outcome.status
        ));
    }
    Ok(())
}

#[then("the health exit code is {code:u8}")]
fn health_exit_code(world: &ToolWorld, code: u8) -> Result<(), eyre::Report> {
    let actual = last_report(world)?.exit_code();
    if actual != code {
        return Err(eyre::eyre!("expected exit code {code}, got {actual}"));
    }
    Ok(())
}
