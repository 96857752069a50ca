pub mod client;
pub mod error;
pub mod inspect;
pub mod runtime;

pub use client::{InspectClient, InspectFailure, InspectReport};
pub use error::{ConnectError, RuntimeError};
pub use runtime::{ContainerRuntime, DockerRuntime};
