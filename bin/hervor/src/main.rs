mod cli;
mod runner;

use std::env;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Commands, NodeConfig},
    runner::Runner,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Node(config) => {
            init_tracing(&config);
            run_node(config).await
        }
    }
}

/// `RUST_LOG` wins over the CLI verbosity when set.
fn init_tracing(config: &NodeConfig) {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(config.verbosity.directive()),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Runs the node until it stops on its own or ctrl-c cancels it. The
/// cancellation token is shared with the beacon client, so shutdown aborts
/// any in-flight request.
async fn run_node(config: NodeConfig) -> Result<()> {
    let cancellation = CancellationToken::new();
    let runner = Runner::new(config, cancellation.clone());

    tokio::select! {
        result = runner.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("ctrl-c received, shutting down...");
            cancellation.cancel();
            Ok(())
        }
    }
}
