//! Compose descriptor generation and writing for recompose.
//!
//! # Pipeline
//!
//! ```text
//! recompose <id>...
//!   1. Inspect  ── recompose-docker → ContainerSnapshot per id
//!   2. Service  ── service_from_snapshot() per snapshot
//!   3. Compose  ── ComposeFile { services, version }
//!   4. Write    ── write_compose() → docker-compose.yml
//! ```
//!
//! # Service mapping
//!
//! Each container becomes one service keyed by its name:
//! - `image`: the configured image reference
//! - `volumes`: mount destination → host source (or `{ source: <volume> }`)
//! - `ports`: `"<container port>:<host port>"` for published ports only
//! - `environment`: raw `KEY=VALUE` entries

pub mod compose;
pub mod service;
pub mod write;

pub use compose::{ComposeFile, Service, VolumeSource};
pub use service::service_from_snapshot;
pub use write::{WriteError, write_compose};
