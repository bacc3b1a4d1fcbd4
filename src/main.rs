mod cli;
mod injector;
mod kubernetes;
mod types;

use clap::Parser;
use tracing::info;

use cli::Cli;
use kubernetes::{KubePodApi, initialize_client};
use types::InjectorConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = InjectorConfig::from_cli(&cli);
    info!("Debug container name for this run: {}", config.container.name);

    let client = initialize_client(cli.kubeconfig.as_deref(), cli.context.clone()).await?;
    let api = KubePodApi::new(client);

    injector::run(&api, &config, &mut std::io::stdout()).await
}
