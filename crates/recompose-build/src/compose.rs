use std::collections::BTreeMap;

use recompose_core::ContainerSnapshot;
use serde::{Deserialize, Serialize};

use crate::service::service_from_snapshot;

/// Top-level compose document.
///
/// Fields are declared in sorted order and collections are `BTreeMap`s, so
/// the rendered YAML lists keys alphabetically at every level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeFile {
    pub services: BTreeMap<String, Service>,
    pub version: String,
}

/// One service entry, describing a single container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub environment: Vec<String>,
    pub image: String,
    pub ports: Vec<String>,
    /// Mount destination to its source
    pub volumes: BTreeMap<String, VolumeSource>,
}

/// Value side of a `volumes` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VolumeSource {
    /// Host path reported by the runtime
    Path(String),
    /// Named volume with no reported host path
    Named { source: String },
}

impl ComposeFile {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            services: BTreeMap::new(),
            version: version.into(),
        }
    }

    /// Build a compose file with one service per snapshot, keyed by name.
    ///
    /// Snapshots are applied in order; when two share a name the later wins.
    pub fn from_snapshots(version: impl Into<String>, snapshots: &[ContainerSnapshot]) -> Self {
        let mut compose = Self::new(version);
        for snapshot in snapshots {
            compose.add_service(snapshot.name.clone(), service_from_snapshot(snapshot));
        }
        compose
    }

    /// Insert a service, replacing any existing service with the same name.
    pub fn add_service(&mut self, name: impl Into<String>, service: Service) {
        let name = name.into();
        if self.services.insert(name.clone(), service).is_some() {
            tracing::debug!(service = %name, "replaced service with duplicate name");
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
