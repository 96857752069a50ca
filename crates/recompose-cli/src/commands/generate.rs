use recompose_build::{ComposeFile, write_compose};
use recompose_core::RecomposeConfig;
use recompose_docker::{ContainerRuntime, InspectClient};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Command-line inputs; unset options fall back to recompose.toml.
pub struct GenerateArgs {
    pub container_ids: Vec<String>,
    pub output_file: Option<PathBuf>,
    pub compose_version: Option<String>,
    pub all: bool,
}

/// Inspect the requested containers and write a compose file describing them.
pub async fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = RecomposeConfig::load(Path::new("."))?;

    let client = InspectClient::connect(&config.runtime)
        .map_err(|e| anyhow::anyhow!("could not connect to Docker API: {e}"))?;

    run(&client, config, args, &mut std::io::stdout()).await
}

/// Probe the runtime, inspect every id, and write the compose file.
///
/// User-facing lines (per-container failures, the final path) go to `out`.
async fn run<R: ContainerRuntime, W: Write>(
    client: &InspectClient<R>,
    config: RecomposeConfig,
    args: GenerateArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let output_file = args
        .output_file
        .unwrap_or_else(|| PathBuf::from(&config.output.file));
    let compose_version = args
        .compose_version
        .unwrap_or(config.output.compose_version);
    tracing::debug!(
        output = %output_file.display(),
        version = %compose_version,
        "resolved output settings"
    );

    client
        .check_connection()
        .await
        .map_err(|e| anyhow::anyhow!("could not connect to Docker API: {e}"))?;

    let mut ids = args.container_ids;
    if args.all {
        let running = client
            .running_container_ids()
            .await
            .map_err(|e| anyhow::anyhow!("could not list running containers: {e}"))?;
        tracing::debug!(running = ?running, "adding running containers");
        for id in running {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    let report = client.inspect_all(&ids).await;
    if report.has_failures() {
        tracing::warn!(
            failed = report.failures.len(),
            inspected = report.containers.len(),
            "some containers could not be inspected"
        );
    }
    for failure in &report.failures {
        writeln!(out, "{}", failure.message())?;
    }

    let compose = ComposeFile::from_snapshots(compose_version, &report.containers);
    write_compose(&output_file, &compose)
        .map_err(|e| anyhow::anyhow!("could not write Docker Compose file: {e}"))?;

    writeln!(out, "Docker Compose file written to {}", output_file.display())?;
    Ok(())
}
