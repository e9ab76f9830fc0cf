use std::path::Path;

use anyhow::{Context, Result, anyhow};
use hervor_beacon_client::BeaconBlobFetcher;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cli::NodeConfig;

/// Node lifecycle: startup checks against the configured endpoints, then
/// park until the cancellation token fires. The derivation driver attaches
/// here once the beacon endpoint is known-good.
pub struct Runner {
    config: NodeConfig,
    cancellation: CancellationToken,
}

impl Runner {
    pub fn new(config: NodeConfig, cancellation: CancellationToken) -> Self {
        Self {
            config,
            cancellation,
        }
    }

    pub async fn run(self) -> Result<()> {
        let chain_spec = &self.config.network;
        info!(
            network = %chain_spec.network,
            chain_id = chain_spec.network.chain_id(),
            block_time = chain_spec.block_time,
            "starting rollup node"
        );

        if let Some(jwt_secret_path) = &self.config.jwt_secret {
            load_jwt_secret(jwt_secret_path)?;
            info!("engine api jwt secret loaded");
        }

        let fetcher =
            BeaconBlobFetcher::new(self.config.l1_beacon_url.clone(), self.cancellation.clone())
                .context("failed to build beacon client")?;

        let genesis_timestamp = fetcher
            .genesis_timestamp()
            .await
            .context("beacon endpoint probe failed")?;
        let spec = fetcher
            .spec()
            .await
            .context("beacon endpoint probe failed")?;
        info!(
            genesis_timestamp,
            seconds_per_slot = spec.seconds_per_slot,
            "beacon endpoint is reachable"
        );

        info!(
            l1_rpc = %self.config.l1_rpc_url,
            l2_rpc = %self.config.l2_rpc_url,
            l2_engine = %self.config.l2_engine_url,
            rpc_port = self.config.rpc_port,
            "configured endpoints"
        );

        self.cancellation.cancelled().await;
        info!("runner stopped");
        Ok(())
    }
}

fn load_jwt_secret(path: &Path) -> Result<[u8; 32]> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read jwt secret file {}", path.display()))?;
    parse_jwt_secret(&contents)
}

/// Engine API JWT secrets are 32 bytes, hex encoded with an optional 0x
/// prefix.
fn parse_jwt_secret(contents: &str) -> Result<[u8; 32]> {
    let bytes = alloy_primitives::hex::decode(contents.trim().trim_start_matches("0x"))
        .context("jwt secret is not valid hex")?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow!("jwt secret must be 32 bytes, got {}", bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_jwt_secret_with_and_without_prefix() {
        let plain = "aa".repeat(32);
        assert_eq!(parse_jwt_secret(&plain).unwrap(), [0xaa; 32]);

        let prefixed = format!("0x{}\n", "bb".repeat(32));
        assert_eq!(parse_jwt_secret(&prefixed).unwrap(), [0xbb; 32]);
    }

    #[test]
    fn rejects_malformed_jwt_secret() {
        assert!(parse_jwt_secret("zz").is_err());
        assert!(parse_jwt_secret(&"aa".repeat(16)).is_err());
    }
}
