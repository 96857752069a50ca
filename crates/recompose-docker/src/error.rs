#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("failed to configure docker client: {source}")]
    Connect { source: bollard::errors::Error },

    #[error("container {id} not found")]
    NotFound { id: String },

    #[error("{source}")]
    Api { source: bollard::errors::Error },

    #[error("inspect response for {id} has no {field}")]
    Malformed { id: String, field: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("{source}")]
    Client { source: RuntimeError },

    #[error("docker daemon unreachable: {source}")]
    Unreachable { source: RuntimeError },
}
