use bollard::models::ContainerInspectResponse;
use mockall::Sequence;
use mockall::mock;
use recompose_core::ContainerSnapshot;
use recompose_docker::inspect::snapshot_from_inspect;
use recompose_docker::{ConnectError, ContainerRuntime, InspectClient, RuntimeError};

mock! {
    Runtime {}

    impl ContainerRuntime for Runtime {
        async fn version(&self) -> Result<String, RuntimeError>;
        async fn inspect(&self, id: &str) -> Result<ContainerSnapshot, RuntimeError>;
        async fn running_container_ids(&self) -> Result<Vec<String>, RuntimeError>;
    }
}

fn server_error(status_code: u16, message: &str) -> RuntimeError {
    RuntimeError::Api {
        source: bollard::errors::Error::DockerResponseServerError {
            status_code,
            message: message.to_owned(),
        },
    }
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

// ── Connection Tests ──

#[tokio::test]
async fn check_connection_returns_api_version() {
    let mut mock = MockRuntime::new();
    mock.expect_version()
        .times(1)
        .returning(|| Ok("1.47".to_owned()));

    let client = InspectClient::with_runtime(mock);
    let version = client.check_connection().await.unwrap();

    assert_eq!(version, "1.47");
}

#[tokio::test]
async fn check_connection_failure_is_unreachable() {
    let mut mock = MockRuntime::new();
    mock.expect_version()
        .returning(|| Err(server_error(500, "daemon is shutting down")));

    let client = InspectClient::with_runtime(mock);
    let result = client.check_connection().await;

    assert!(matches!(result, Err(ConnectError::Unreachable { .. })));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("daemon is shutting down"), "got: {err}");
}

// ── Inspect Tests ──

#[tokio::test]
async fn inspect_all_collects_snapshots_in_order() {
    let mut mock = MockRuntime::new();
    mock.expect_inspect()
        .times(2)
        .returning(|id| Ok(ContainerSnapshot::new(id, &format!("/{id}"), "alpine:3.20")));

    let client = InspectClient::with_runtime(mock);
    let report = client.inspect_all(&ids(&["web", "db"])).await;

    assert!(!report.has_failures());
    let names: Vec<_> = report.containers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["web", "db"]);
}

#[tokio::test]
async fn inspect_all_is_sequential_in_argument_order() {
    let mut mock = MockRuntime::new();
    let mut seq = Sequence::new();

    for expected in ["c", "a", "b"] {
        mock.expect_inspect()
            .withf(move |id| id == expected)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(ContainerSnapshot::new(id, id, "busybox")));
    }

    let client = InspectClient::with_runtime(mock);
    let report = client.inspect_all(&ids(&["c", "a", "b"])).await;

    assert_eq!(report.containers.len(), 3);
}

#[tokio::test]
async fn not_found_is_reported_and_rest_continue() {
    let mut mock = MockRuntime::new();
    mock.expect_inspect()
        .withf(|id| id == "ghost")
        .returning(|id| Err(RuntimeError::NotFound { id: id.to_owned() }));
    mock.expect_inspect()
        .withf(|id| id == "web")
        .returning(|id| Ok(ContainerSnapshot::new(id, "/web", "nginx")));

    let client = InspectClient::with_runtime(mock);
    let report = client.inspect_all(&ids(&["ghost", "web"])).await;

    assert_eq!(report.containers.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, "ghost");
    assert_eq!(report.failures[0].message(), "Container ghost not found");
}

#[tokio::test]
async fn api_error_is_reported_and_rest_continue() {
    let mut mock = MockRuntime::new();
    mock.expect_inspect()
        .withf(|id| id == "flaky")
        .returning(|_| Err(server_error(500, "internal error")));
    mock.expect_inspect()
        .withf(|id| id == "db")
        .returning(|id| Ok(ContainerSnapshot::new(id, "/db", "postgres:16")));

    let client = InspectClient::with_runtime(mock);
    let report = client.inspect_all(&ids(&["flaky", "db"])).await;

    assert_eq!(report.containers.len(), 1);
    assert_eq!(report.containers[0].name, "db");

    let message = report.failures[0].message();
    assert!(
        message.starts_with("Error communicating with Docker API: "),
        "got: {message}"
    );
    assert!(message.contains("internal error"), "got: {message}");
}

#[tokio::test]
async fn malformed_response_is_an_api_failure() {
    let mut mock = MockRuntime::new();
    mock.expect_inspect().returning(|id| {
        Err(RuntimeError::Malformed {
            id: id.to_owned(),
            field: "Config.Image",
        })
    });

    let client = InspectClient::with_runtime(mock);
    let report = client.inspect_all(&ids(&["odd"])).await;

    assert!(report.containers.is_empty());
    let message = report.failures[0].message();
    assert!(message.contains("Config.Image"), "got: {message}");
}

#[tokio::test]
async fn inspect_all_with_no_ids_makes_no_calls() {
    let mut mock = MockRuntime::new();
    mock.expect_inspect().never();

    let client = InspectClient::with_runtime(mock);
    let report = client.inspect_all(&[]).await;

    assert!(report.containers.is_empty());
    assert!(!report.has_failures());
}

// ── Running Containers ──

#[tokio::test]
async fn running_container_ids_passthrough() {
    let mut mock = MockRuntime::new();
    mock.expect_running_container_ids()
        .returning(|| Ok(ids(&["aaa", "bbb"])));

    let client = InspectClient::with_runtime(mock);
    let running = client.running_container_ids().await.unwrap();

    assert_eq!(running, vec!["aaa", "bbb"]);
}

// ── Inspect Response Conversion ──

#[test]
fn snapshot_from_real_inspect_json() {
    let response: ContainerInspectResponse =
        serde_json::from_str(include_str!("fixtures/inspect_web.json")).unwrap();

    let snapshot = snapshot_from_inspect("web", response).unwrap();

    assert_eq!(snapshot.name, "web");
    assert_eq!(snapshot.image, "nginx:1.27");
    assert!(snapshot.id.starts_with("5f3a9c1e"));

    assert_eq!(snapshot.mounts.len(), 2);
    assert_eq!(snapshot.mounts[0].destination, "/usr/share/nginx/html");
    assert_eq!(snapshot.mounts[0].source.as_deref(), Some("/srv/site"));
    assert_eq!(snapshot.mounts[0].name, None);
    assert_eq!(snapshot.mounts[1].name.as_deref(), Some("nginx-cache"));

    assert!(snapshot.ports["443/tcp"].is_empty());
    assert_eq!(snapshot.ports["80/tcp"].len(), 2);
    assert_eq!(snapshot.ports["80/tcp"][0].host_port.as_deref(), Some("8080"));

    assert_eq!(snapshot.env.len(), 3);
    assert_eq!(snapshot.env[1], "NGINX_VERSION=1.27.2");
}
