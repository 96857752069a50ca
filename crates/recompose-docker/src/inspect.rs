//! Conversion from Engine API inspect responses to [`ContainerSnapshot`].

use std::collections::BTreeMap;

use bollard::models::{ContainerInspectResponse, MountPoint, PortBinding, PortMap};
use recompose_core::snapshot::normalize_name;
use recompose_core::{ContainerSnapshot, HostBinding, MountSnapshot};

use crate::error::RuntimeError;

/// Build a snapshot from an inspect response.
///
/// `requested` is the id or name the caller asked for; it is used for error
/// reporting and as the id when the response omits one. Missing mounts,
/// ports, or environment are treated as empty. A response without a config
/// image is rejected.
pub fn snapshot_from_inspect(
    requested: &str,
    response: ContainerInspectResponse,
) -> Result<ContainerSnapshot, RuntimeError> {
    let id = response.id.unwrap_or_else(|| requested.to_owned());

    let config = response.config.ok_or_else(|| RuntimeError::Malformed {
        id: id.clone(),
        field: "Config",
    })?;
    let image = config.image.ok_or_else(|| RuntimeError::Malformed {
        id: id.clone(),
        field: "Config.Image",
    })?;

    let name = response.name.as_deref().map(normalize_name).unwrap_or_default();

    let mounts = response
        .mounts
        .unwrap_or_default()
        .into_iter()
        .filter_map(|m| mount_snapshot(&id, m))
        .collect();

    let ports = response
        .network_settings
        .and_then(|net| net.ports)
        .map(port_snapshot)
        .unwrap_or_default();

    Ok(ContainerSnapshot {
        id,
        name,
        image,
        mounts,
        ports,
        env: config.env.unwrap_or_default(),
    })
}

fn mount_snapshot(id: &str, mount: MountPoint) -> Option<MountSnapshot> {
    let Some(destination) = mount.destination else {
        tracing::warn!(container = %id, "mount without destination; skipping");
        return None;
    };
    Some(MountSnapshot {
        destination,
        source: mount.source,
        name: mount.name,
    })
}

fn port_snapshot(ports: PortMap) -> BTreeMap<String, Vec<HostBinding>> {
    ports
        .into_iter()
        .map(|(key, bindings)| {
            let bindings = bindings
                .unwrap_or_default()
                .into_iter()
                .map(host_binding)
                .collect();
            (key, bindings)
        })
        .collect()
}

fn host_binding(binding: PortBinding) -> HostBinding {
    HostBinding {
        host_ip: binding.host_ip,
        host_port: binding.host_port,
    }
}
