use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// A `(hash, number)` pair identifying a block on either chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockId {
    pub hash: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub number: u64,
}

impl BlockId {
    pub fn new(hash: B256, number: u64) -> Self {
        Self { hash, number }
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.hash, self.number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct L1BlockRef {
    pub hash: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub number: u64,
    pub parent_hash: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
}

impl L1BlockRef {
    pub fn to_id(&self) -> BlockId {
        BlockId::new(self.hash, self.number)
    }
}

/// A compact descriptor of an L2 block carrying its L1 origin and the
/// distance to the first block of its epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct L2BlockRef {
    pub hash: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub number: u64,
    pub parent_hash: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
    pub l1_origin: BlockId,
    #[serde(with = "serde_utils::quoted_u64")]
    pub sequence_number: u64,
}

impl L2BlockRef {
    pub fn to_id(&self) -> BlockId {
        BlockId::new(self.hash, self.number)
    }
}
