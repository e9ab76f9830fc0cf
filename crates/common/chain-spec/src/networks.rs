use std::sync::{Arc, LazyLock};

use hervor_payload::execution_payload::PayloadVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Optimism,
    OptimismSepolia,
    Base,
    BaseSepolia,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Optimism => 10,
            Network::OptimismSepolia => 11155420,
            Network::Base => 8453,
            Network::BaseSepolia => 84532,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Optimism => write!(f, "optimism"),
            Network::OptimismSepolia => write!(f, "optimism-sepolia"),
            Network::Base => write!(f, "base"),
            Network::BaseSepolia => write!(f, "base-sepolia"),
        }
    }
}

/// Static description of one rollup chain: identity, timing, and the fork
/// activation times that drive payload version selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupChainSpec {
    pub network: Network,
    pub l2_genesis_time: u64,
    /// Seconds between consecutive L2 blocks.
    pub block_time: u64,
    /// Canyon activation time; `None` means unscheduled.
    pub canyon_time: Option<u64>,
}

impl RollupChainSpec {
    pub fn is_canyon_active(&self, timestamp: u64) -> bool {
        self.canyon_time
            .is_some_and(|canyon_time| timestamp >= canyon_time)
    }

    /// The SSZ payload variant for a block at `timestamp`. Canyon introduced
    /// the withdrawals list; payloads before it carry none.
    pub fn payload_version(&self, timestamp: u64) -> PayloadVersion {
        if self.is_canyon_active(timestamp) {
            PayloadVersion::V1
        } else {
            PayloadVersion::V0
        }
    }
}

pub static OPTIMISM: LazyLock<Arc<RollupChainSpec>> = LazyLock::new(|| {
    RollupChainSpec {
        network: Network::Optimism,
        l2_genesis_time: 1686068903,
        block_time: 2,
        canyon_time: Some(1704992401),
    }
    .into()
});

pub static OPTIMISM_SEPOLIA: LazyLock<Arc<RollupChainSpec>> = LazyLock::new(|| {
    RollupChainSpec {
        network: Network::OptimismSepolia,
        l2_genesis_time: 1691802540,
        block_time: 2,
        canyon_time: Some(1699981200),
    }
    .into()
});

pub static BASE: LazyLock<Arc<RollupChainSpec>> = LazyLock::new(|| {
    RollupChainSpec {
        network: Network::Base,
        l2_genesis_time: 1686789347,
        block_time: 2,
        canyon_time: Some(1704992401),
    }
    .into()
});

pub static BASE_SEPOLIA: LazyLock<Arc<RollupChainSpec>> = LazyLock::new(|| {
    RollupChainSpec {
        network: Network::BaseSepolia,
        l2_genesis_time: 1695768288,
        block_time: 2,
        canyon_time: Some(1699981200),
    }
    .into()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canyon_selects_withdrawal_payloads() {
        let spec = OPTIMISM.clone();
        let canyon_time = spec.canyon_time.unwrap();

        assert_eq!(
            spec.payload_version(canyon_time - 1),
            PayloadVersion::V0
        );
        assert_eq!(spec.payload_version(canyon_time), PayloadVersion::V1);
        assert_eq!(spec.payload_version(canyon_time + 2), PayloadVersion::V1);
    }

    #[test]
    fn unscheduled_canyon_stays_on_v0() {
        let spec = RollupChainSpec {
            network: Network::Optimism,
            l2_genesis_time: 0,
            block_time: 2,
            canyon_time: None,
        };
        assert_eq!(spec.payload_version(u64::MAX), PayloadVersion::V0);
    }

    #[test]
    fn chain_ids() {
        assert_eq!(OPTIMISM.network.chain_id(), 10);
        assert_eq!(BASE.network.chain_id(), 8453);
        assert_eq!(BASE_SEPOLIA.network.chain_id(), 84532);
    }
}
