use alloy_primitives::{B256, Bytes, FixedBytes};
use serde::{Deserialize, Serialize};

pub type KzgCommitment = FixedBytes<48>;
pub type KzgProof = FixedBytes<48>;
pub type BlsSignature = FixedBytes<96>;

/// The `{ "data": ... }` envelope wrapping every beacon API response
/// consumed here.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Reduced view of `/eth/v1/beacon/genesis`; unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconGenesis {
    #[serde(with = "serde_utils::quoted_u64")]
    pub genesis_time: u64,
}

/// Reduced view of `/eth/v1/config/spec`. The endpoint returns the whole
/// chain config; only the slot interval is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconSpecConfig {
    #[serde(rename = "SECONDS_PER_SLOT", with = "serde_utils::quoted_u64")]
    pub seconds_per_slot: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlockHeader {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub parent_root: B256,
    pub state_root: B256,
    pub body_root: B256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    pub signature: BlsSignature,
}

/// One EIP-4844 sidecar as served by the beacon node. All fields are
/// forwarded verbatim; commitment and inclusion-proof verification belongs
/// to a separate verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobSidecar {
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    pub blob: Bytes,
    pub kzg_commitment: KzgCommitment,
    pub kzg_proof: KzgProof,
    pub signed_block_header: SignedBeaconBlockHeader,
    pub kzg_commitment_inclusion_proof: Vec<B256>,
}

/// Block selector for the sidecars endpoint: a slot number (decimal) or a
/// beacon block root (0x-hex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconBlockId {
    Slot(u64),
    Root(B256),
}

impl std::fmt::Display for BeaconBlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeaconBlockId::Slot(slot) => write!(f, "{slot}"),
            BeaconBlockId::Root(root) => write!(f, "{root}"),
        }
    }
}
