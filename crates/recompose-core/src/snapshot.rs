//! Runtime-neutral view of an inspected container.
//!
//! A [`ContainerSnapshot`] carries only the fields the compose transform
//! reads, already normalized away from any particular runtime client:
//!
//! - Container name without the leading `/` the Engine API reports
//! - Image reference as configured, not the resolved image id
//! - Mounts in runtime order
//! - Port keys (`"80/tcp"`) with their host bindings, sorted by key
//! - Raw `KEY=VALUE` environment entries

use std::collections::BTreeMap;

/// A single host binding for a container port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostBinding {
    pub host_ip: Option<String>,
    pub host_port: Option<String>,
}

/// A mount point attached to a container.
///
/// Bind mounts always report a `source`; named volumes report both a
/// `source` (the volume's data directory) and a `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountSnapshot {
    /// Path inside the container
    pub destination: String,
    /// Path on the host, if the runtime reported one
    pub source: Option<String>,
    /// Volume name, for named volumes
    pub name: Option<String>,
}

/// Live state of one container, as needed to describe it as a service.
///
/// # Examples
///
/// ```
/// use recompose_core::ContainerSnapshot;
///
/// let snapshot = ContainerSnapshot::new("3f1c2a", "/web", "nginx:1.27");
/// assert_eq!(snapshot.name, "web");
/// assert!(snapshot.mounts.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSnapshot {
    /// Full container id
    pub id: String,
    /// Container name, leading slashes stripped
    pub name: String,
    /// Image reference from the container config
    pub image: String,
    pub mounts: Vec<MountSnapshot>,
    /// Port key (`"<port>/<proto>"`) to host bindings.
    ///
    /// An empty binding list means the port is exposed but not published.
    pub ports: BTreeMap<String, Vec<HostBinding>>,
    /// Raw `KEY=VALUE` entries
    pub env: Vec<String>,
}

impl ContainerSnapshot {
    /// Create a snapshot with no mounts, ports, or environment.
    ///
    /// `name` is normalized the way the Engine API names are displayed:
    /// every leading `/` is removed.
    pub fn new(id: impl Into<String>, name: &str, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: normalize_name(name),
            image: image.into(),
            ..Self::default()
        }
    }
}

/// Strip the leading `/` characters the Engine API prefixes names with.
pub fn normalize_name(raw: &str) -> String {
    raw.trim_start_matches('/').to_owned()
}

/// Port number portion of a port key.
///
/// ```
/// assert_eq!(recompose_core::port_number("8080/tcp"), "8080");
/// assert_eq!(recompose_core::port_number("53"), "53");
/// ```
pub fn port_number(key: &str) -> &str {
    key.split('/').next().unwrap_or(key)
}
