use crate::error::{ConnectError, RuntimeError};
use crate::runtime::{ContainerRuntime, DockerRuntime};
use recompose_core::{ContainerSnapshot, RuntimeConfig};

/// Container inspection client, parameterized over the runtime for testability.
pub struct InspectClient<R: ContainerRuntime = DockerRuntime> {
    runtime: R,
}

impl InspectClient<DockerRuntime> {
    pub fn connect(config: &RuntimeConfig) -> Result<Self, ConnectError> {
        let runtime =
            DockerRuntime::connect(config).map_err(|e| ConnectError::Client { source: e })?;
        Ok(Self { runtime })
    }
}

impl<R: ContainerRuntime> InspectClient<R> {
    pub fn with_runtime(runtime: R) -> Self {
        Self { runtime }
    }

    /// Confirm the daemon answers, returning its API version.
    pub async fn check_connection(&self) -> Result<String, ConnectError> {
        let version = self
            .runtime
            .version()
            .await
            .map_err(|e| ConnectError::Unreachable { source: e })?;
        tracing::debug!(api_version = %version, "docker daemon reachable");
        Ok(version)
    }

    /// Inspect every id in order, one at a time.
    ///
    /// A failing id is recorded in the report and never stops the rest.
    pub async fn inspect_all(&self, ids: &[String]) -> InspectReport {
        let mut report = InspectReport::default();

        for id in ids {
            tracing::debug!(container = %id, "inspecting container");
            match self.runtime.inspect(id).await {
                Ok(snapshot) => report.containers.push(snapshot),
                Err(error) => {
                    tracing::debug!(container = %id, %error, "inspect failed");
                    report.failures.push(InspectFailure {
                        id: id.clone(),
                        error,
                    });
                }
            }
        }

        report
    }

    pub async fn running_container_ids(&self) -> Result<Vec<String>, RuntimeError> {
        self.runtime.running_container_ids().await
    }
}

// ── Report types ──

#[derive(Debug, Default)]
pub struct InspectReport {
    pub containers: Vec<ContainerSnapshot>,
    pub failures: Vec<InspectFailure>,
}

impl InspectReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[derive(Debug)]
pub struct InspectFailure {
    pub id: String,
    pub error: RuntimeError,
}

impl InspectFailure {
    /// User-facing line describing the failure.
    pub fn message(&self) -> String {
        match &self.error {
            RuntimeError::NotFound { .. } => format!("Container {} not found", self.id),
            other => format!("Error communicating with Docker API: {other}"),
        }
    }
}
