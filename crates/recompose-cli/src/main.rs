mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "recompose",
    about = "Generate a Docker Compose file from one or more containers"
)]
#[command(version)]
struct Cli {
    /// IDs or names of the containers to inspect
    #[arg(required_unless_present = "all")]
    container_ids: Vec<String>,
    /// Name of output file (default: docker-compose.yml)
    #[arg(long, short = 'o')]
    output_file: Option<PathBuf>,
    /// Version of Docker Compose file to generate (default: 3)
    #[arg(long, short = 'v')]
    compose_version: Option<String>,
    /// Also inspect every running container
    #[arg(long)]
    all: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    commands::generate(commands::GenerateArgs {
        container_ids: cli.container_ids,
        output_file: cli.output_file,
        compose_version: cli.compose_version,
        all: cli.all,
    })
    .await?;

    Ok(())
}
