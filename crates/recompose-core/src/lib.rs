//! Core types and configuration for recompose.
//!
//! This crate defines the `recompose.toml` schema ([`RecomposeConfig`]),
//! the runtime-neutral view of an inspected container ([`ContainerSnapshot`]),
//! and shared error types.

pub mod config;
pub mod error;
pub mod snapshot;

pub use config::{OutputConfig, RecomposeConfig, RuntimeConfig};
pub use error::{Error, Result};
pub use snapshot::{ContainerSnapshot, HostBinding, MountSnapshot, port_number};
