pub mod constants;
pub mod verbosity;

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use hervor_chain_spec::{cli::chain_spec_parser, networks::RollupChainSpec};
use url::Url;

use crate::cli::{
    constants::{DEFAULT_NETWORK, DEFAULT_RPC_PORT},
    verbosity::{Verbosity, verbosity_parser},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the rollup node
    #[command(name = "node")]
    Node(NodeConfig),
}

#[derive(Debug, Parser)]
pub struct NodeConfig {
    /// Verbosity level
    #[arg(short, long, default_value = "3", value_parser = verbosity_parser)]
    pub verbosity: Verbosity,

    #[arg(
        long,
        help = "Choose optimism, optimism-sepolia, base, or base-sepolia",
        default_value = DEFAULT_NETWORK,
        value_parser = chain_spec_parser
    )]
    pub network: Arc<RollupChainSpec>,

    #[arg(long, help = "The L1 chain RPC URL")]
    pub l1_rpc_url: Url,

    #[arg(
        long,
        help = "The L1 beacon chain API URL. Blob sidecars are fetched from here."
    )]
    pub l1_beacon_url: Url,

    #[arg(long, help = "The L2 chain RPC URL")]
    pub l2_rpc_url: Url,

    #[arg(long, help = "The L2 engine API URL")]
    pub l2_engine_url: Url,

    #[arg(
        long,
        help = "Path to the JWT secret file used to authenticate with the engine API"
    )]
    pub jwt_secret: Option<PathBuf>,

    #[arg(long, help = "The port of the RPC server", default_value_t = DEFAULT_RPC_PORT)]
    pub rpc_port: u16,
}
