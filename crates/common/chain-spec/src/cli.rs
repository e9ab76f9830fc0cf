use std::sync::Arc;

use crate::networks::{BASE, BASE_SEPOLIA, OPTIMISM, OPTIMISM_SEPOLIA, RollupChainSpec};

/// Resolves a `--network` argument to a chain spec. Usable as a clap
/// `value_parser`.
pub fn chain_spec_parser(network_string: &str) -> Result<Arc<RollupChainSpec>, String> {
    match network_string.to_lowercase().as_str() {
        "optimism" | "op-mainnet" => Ok(OPTIMISM.clone()),
        "optimism-sepolia" | "op-sepolia" => Ok(OPTIMISM_SEPOLIA.clone()),
        "base" | "base-mainnet" => Ok(BASE.clone()),
        "base-sepolia" => Ok(BASE_SEPOLIA.clone()),
        _ => Err(format!(
            "unknown network: {network_string}, expected one of optimism, optimism-sepolia, base, base-sepolia"
        )),
    }
}
