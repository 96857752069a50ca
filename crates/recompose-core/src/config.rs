use serde::{Deserialize, Serialize};

/// recompose.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecomposeConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated compose file
    #[serde(default = "default_output_file")]
    pub file: String,
    /// Value written to the top-level `version` key
    #[serde(default = "default_compose_version")]
    pub compose_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Docker daemon address (`unix://...`, `tcp://...`, `http://...`).
    /// When None, `DOCKER_HOST` or the platform default socket is used.
    #[serde(default)]
    pub host: Option<String>,
    /// Request timeout in seconds for explicitly configured hosts
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            compose_version: default_compose_version(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            host: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RecomposeConfig {
    /// Load from recompose.toml at the given path, or return defaults if not found.
    pub fn load(dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = dir.join("recompose.toml");
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_output_file() -> String {
    "docker-compose.yml".to_owned()
}

fn default_compose_version() -> String {
    "3".to_owned()
}

fn default_timeout_secs() -> u64 {
    120
}
