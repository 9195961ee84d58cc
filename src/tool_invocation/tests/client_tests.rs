//! Unit tests for the retrying invocation client.

use crate::tool_invocation::{
    adapters::{RecordingSleeper, memory::InMemoryConnectionRegistry, mock::MockToolBackend},
    domain::{RetryPolicy, TargetName, ToolName, ToolParams},
    ports::{ConnectionRegistry, ToolBackend, ToolBackendError, ToolBackendResult},
    services::{ToolInvocationClient, ToolInvocationError},
};
use async_trait::async_trait;
use mockall::{Sequence, mock};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

mock! {
    pub Backend {}

    #[async_trait]
    impl ToolBackend for Backend {
        fn target(&self) -> &TargetName;
        async fn connect(&self) -> ToolBackendResult<()>;
        async fn execute(&self, tool: &ToolName, params: &ToolParams) -> ToolBackendResult<Value>;
    }
}

type TestClient = ToolInvocationClient<InMemoryConnectionRegistry, RecordingSleeper>;

const UNIT: Duration = Duration::from_millis(5);

struct Harness {
    registry: Arc<InMemoryConnectionRegistry>,
    sleeper: Arc<RecordingSleeper>,
}

#[fixture]
fn harness() -> Harness {
    Harness {
        registry: Arc::new(InMemoryConnectionRegistry::new()),
        sleeper: Arc::new(RecordingSleeper::new()),
    }
}

impl Harness {
    fn client(&self, backend: Arc<dyn ToolBackend>) -> TestClient {
        ToolInvocationClient::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.sleeper),
            RetryPolicy::new(UNIT),
        )
        .with_backend(backend)
    }
}

fn mock_backend() -> MockBackend {
    let mut backend = MockBackend::new();
    backend.expect_target().return_const(TargetName::github());
    backend.expect_connect().returning(|| Ok(()));
    backend
}

fn query(text: &str) -> ToolParams {
    let mut params = ToolParams::new();
    params.insert("query".to_owned(), json!(text));
    params
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn call_before_connect_fails_without_attempts(harness: Harness) {
    let mut backend = mock_backend();
    backend.expect_execute().never();
    let client = harness.client(Arc::new(backend));

    let err = client
        .call(&TargetName::github(), "search_repositories", query("x"))
        .await
        .expect_err("unconnected target should fail");

    assert!(matches!(err, ToolInvocationError::NotConnected(_)));
    assert_eq!(err.to_string(), "Server github not connected");
    assert!(harness.sleeper.recorded().is_empty());
}

/// Buffer collecting formatted log output.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[rstest]
#[tokio::test]
async fn rejected_tool_name_logs_first_attempt(harness: Harness) {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);
    let mut backend = mock_backend();
    backend.expect_execute().never();
    let client = harness.client(Arc::new(backend));
    client
        .connect(&TargetName::github())
        .await
        .expect("connect should succeed");

    client
        .call(&TargetName::github(), "", ToolParams::new())
        .await
        .expect("call should return a result");

    let output = logs.contents();
    let attempt = output.find("calling tool").expect("attempt should be logged");
    let rejection = output
        .find("validation error")
        .expect("rejection should be logged");
    assert!(attempt < rejection);
    assert!(output.contains("attempt=1"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_tool_name_fails_without_attempts(harness: Harness) {
    let mut backend = mock_backend();
    backend.expect_execute().never();
    let client = harness.client(Arc::new(backend));
    client
        .connect(&TargetName::github())
        .await
        .expect("connect should succeed");

    let result = client
        .call(&TargetName::github(), "  ", ToolParams::new())
        .await
        .expect("call should return a result");

    assert!(!result.is_success());
    assert_eq!(result.error(), Some("Tool name cannot be empty"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn transient_failures_are_retried_until_success(harness: Harness) {
    let mut backend = mock_backend();
    let mut sequence = Sequence::new();
    backend
        .expect_execute()
        .times(2)
        .in_sequence(&mut sequence)
        .returning(|_, _| Err(ToolBackendError::Execution("upstream timeout".to_owned())));
    backend
        .expect_execute()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_, _| Ok(json!({"items": []})));
    let client = harness.client(Arc::new(backend));
    client
        .connect(&TargetName::github())
        .await
        .expect("connect should succeed");

    let result = client
        .call(&TargetName::github(), "search_repositories", query("x"))
        .await
        .expect("call should return a result");

    assert!(result.is_success());
    assert_eq!(result.data(), Some(&json!({"items": []})));
    assert_eq!(harness.sleeper.recorded(), vec![UNIT, UNIT * 2]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn exhausted_retries_return_last_error(harness: Harness) {
    let mut backend = mock_backend();
    let mut attempt = 0_u32;
    backend.expect_execute().times(3).returning(move |_, _| {
        attempt += 1;
        Err(ToolBackendError::Execution(format!("failure {attempt}")))
    });
    let client = harness.client(Arc::new(backend));
    client
        .connect(&TargetName::github())
        .await
        .expect("connect should succeed");

    let result = client
        .call(&TargetName::github(), "search_repositories", query("x"))
        .await
        .expect("call should return a result");

    assert!(!result.is_success());
    assert_eq!(result.error(), Some("failure 3"));
    assert_eq!(harness.sleeper.recorded(), vec![UNIT, UNIT * 2]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_params_are_not_retried(harness: Harness) {
    let client = harness.client(Arc::new(MockToolBackend::github()));
    client
        .connect(&TargetName::github())
        .await
        .expect("connect should succeed");

    let result = client
        .call(&TargetName::github(), "get_file_contents", ToolParams::new())
        .await
        .expect("call should return a result");

    assert_eq!(result.error(), Some("Missing path parameter"));
    assert!(harness.sleeper.recorded().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_connect_leaves_target_unregistered(harness: Harness) {
    let backend = MockToolBackend::github().with_connect_failure("refused");
    let client = harness.client(Arc::new(backend));

    let err = client
        .connect(&TargetName::github())
        .await
        .expect_err("connect should fail");

    assert!(err.is_connection_error());
    assert!(
        !harness
            .registry
            .is_connected(&TargetName::github())
            .await
            .expect("registry lookup")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn connecting_unknown_target_fails(harness: Harness) {
    let client = harness.client(Arc::new(MockToolBackend::github()));

    let err = client
        .connect(&TargetName::testsprite())
        .await
        .expect_err("no backend serves testsprite");

    assert!(matches!(err, ToolInvocationError::UnknownTarget(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_mock_tool_returns_generic_payload(harness: Harness) {
    let client = harness.client(Arc::new(MockToolBackend::github()));
    client
        .connect(&TargetName::github())
        .await
        .expect("connect should succeed");

    let result = client
        .call(&TargetName::github(), "list_issues", ToolParams::new())
        .await
        .expect("call should return a result");

    assert_eq!(result.data(), Some(&json!({"mock": "generic_response"})));
}

#[rstest]
fn configured_targets_are_sorted(harness: Harness) {
    let client = harness
        .client(Arc::new(MockToolBackend::testsprite()))
        .with_backend(Arc::new(MockToolBackend::github()));

    assert_eq!(
        client.configured_targets(),
        vec![TargetName::github(), TargetName::testsprite()]
    );
}
