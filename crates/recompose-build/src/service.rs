use std::collections::BTreeMap;

use recompose_core::{ContainerSnapshot, HostBinding, MountSnapshot, port_number};

use crate::compose::{Service, VolumeSource};

/// Map a container snapshot onto a compose service.
pub fn service_from_snapshot(snapshot: &ContainerSnapshot) -> Service {
    Service {
        environment: snapshot.env.clone(),
        image: snapshot.image.clone(),
        ports: published_ports(snapshot),
        volumes: volumes(snapshot),
    }
}

fn volumes(snapshot: &ContainerSnapshot) -> BTreeMap<String, VolumeSource> {
    let mut volumes = BTreeMap::new();
    for mount in &snapshot.mounts {
        match volume_source(mount) {
            Some(source) => {
                volumes.insert(mount.destination.clone(), source);
            }
            None => tracing::warn!(
                container = %snapshot.name,
                destination = %mount.destination,
                "mount has neither source nor volume name; skipping"
            ),
        }
    }
    volumes
}

fn volume_source(mount: &MountSnapshot) -> Option<VolumeSource> {
    if let Some(source) = &mount.source {
        return Some(VolumeSource::Path(source.clone()));
    }
    mount.name.as_ref().map(|name| VolumeSource::Named {
        source: name.clone(),
    })
}

/// `"<container port>:<host port>"` for every port with at least one binding.
///
/// Only the first binding of each port is used.
fn published_ports(snapshot: &ContainerSnapshot) -> Vec<String> {
    snapshot
        .ports
        .iter()
        .filter_map(|(key, bindings)| {
            let first = bindings.first()?;
            port_mapping(key, first).or_else(|| {
                tracing::warn!(
                    container = %snapshot.name,
                    port = %key,
                    "published port has no host port; skipping"
                );
                None
            })
        })
        .collect()
}

fn port_mapping(key: &str, binding: &HostBinding) -> Option<String> {
    let host_port = binding.host_port.as_deref()?;
    Some(format!("{}:{host_port}", port_number(key)))
}
