use bollard::container::{InspectContainerOptions, ListContainersOptions};
use bollard::{API_DEFAULT_VERSION, Docker};
use recompose_core::{ContainerSnapshot, RuntimeConfig};

use crate::error::RuntimeError;
use crate::inspect::snapshot_from_inspect;

/// Abstraction over the container runtime API for testability.
///
/// Production code uses [`DockerRuntime`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait ContainerRuntime: Send + Sync {
    /// API version reported by the daemon. Doubles as a connectivity probe.
    async fn version(&self) -> Result<String, RuntimeError>;

    /// Inspect a single container by id or name.
    async fn inspect(&self, id: &str) -> Result<ContainerSnapshot, RuntimeError>;

    /// Ids of the currently running containers.
    async fn running_container_ids(&self) -> Result<Vec<String>, RuntimeError>;
}

/// Docker Engine API runtime backed by bollard.
pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    /// Configure a client for the daemon described by `config`.
    ///
    /// No request is made here; use [`ContainerRuntime::version`] to check
    /// that the daemon actually answers.
    pub fn connect(config: &RuntimeConfig) -> Result<Self, RuntimeError> {
        let docker = match config.host.as_deref() {
            None => Docker::connect_with_local_defaults(),
            Some(host) if host.starts_with("unix://") => {
                Docker::connect_with_unix(host, config.timeout_secs, API_DEFAULT_VERSION)
            }
            Some(host) => {
                Docker::connect_with_http(host, config.timeout_secs, API_DEFAULT_VERSION)
            }
        }
        .map_err(|e| RuntimeError::Connect { source: e })?;

        tracing::debug!(host = ?config.host, "docker client configured");
        Ok(Self { docker })
    }
}

impl ContainerRuntime for DockerRuntime {
    async fn version(&self) -> Result<String, RuntimeError> {
        let version = self
            .docker
            .version()
            .await
            .map_err(|e| RuntimeError::Api { source: e })?;
        Ok(version.api_version.unwrap_or_default())
    }

    async fn inspect(&self, id: &str) -> Result<ContainerSnapshot, RuntimeError> {
        let response = self
            .docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(|e| match e {
                bollard::errors::Error::DockerResponseServerError {
                    status_code: 404, ..
                } => RuntimeError::NotFound { id: id.to_owned() },
                other => RuntimeError::Api { source: other },
            })?;

        snapshot_from_inspect(id, response)
    }

    async fn running_container_ids(&self) -> Result<Vec<String>, RuntimeError> {
        let options = ListContainersOptions::<String> {
            all: false,
            ..Default::default()
        };

        let containers = self
            .docker
            .list_containers(Some(options))
            .await
            .map_err(|e| RuntimeError::Api { source: e })?;

        Ok(containers.into_iter().filter_map(|c| c.id).collect())
    }
}
