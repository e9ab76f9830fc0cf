use alloy_primitives::{Address, B256, Bloom, Bytes, U256};
use hervor_primitives::block_ref::BlockId;
use serde::{Deserialize, Serialize};

use crate::{
    error::CodecError,
    reader::SszReader,
    transactions::decode_transactions,
    withdrawal::{Withdrawal, decode_withdrawals},
};

// All fixed-size fields plus one u32 per variable-size field, in field order.
const EXECUTION_PAYLOAD_FIXED_PART_V0: usize =
    32 + 20 + 32 + 32 + 256 + 32 + 8 + 8 + 8 + 8 + 4 + 32 + 32 + 4;

// Additional 4 bytes for the withdrawals offset.
const EXECUTION_PAYLOAD_FIXED_PART_V1: usize = EXECUTION_PAYLOAD_FIXED_PART_V0 + 4;

/// MAX_EXTRA_DATA_BYTES in the consensus spec.
pub const MAX_EXTRA_DATA_SIZE: u32 = 32;

/// SSZ layout variant of an execution payload. The variant is selected by
/// the caller from the L2 fork active at the block's timestamp; the wire
/// bytes do not self-describe. Later forks add variants here rather than
/// reinterpreting existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadVersion {
    /// Bellatrix-style payload without a withdrawals list.
    V0,
    /// Capella-style payload with a trailing withdrawals list.
    V1,
}

impl PayloadVersion {
    pub fn fixed_part_size(&self) -> usize {
        match self {
            PayloadVersion::V0 => EXECUTION_PAYLOAD_FIXED_PART_V0,
            PayloadVersion::V1 => EXECUTION_PAYLOAD_FIXED_PART_V1,
        }
    }

    pub fn has_withdrawals(&self) -> bool {
        matches!(self, PayloadVersion::V1)
    }
}

/// An engine-API execution payload decoded from its SSZ encoding. Value
/// object: created by [`ExecutionPayload::from_ssz`], never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPayload {
    pub parent_hash: B256,
    pub fee_recipient: Address,
    pub state_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: Bloom,
    pub prev_randao: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub block_number: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_limit: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
    pub extra_data: Bytes,
    #[serde(with = "serde_utils::quoted_u256")]
    pub base_fee_per_gas: U256,
    pub block_hash: B256,
    pub transactions: Vec<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals: Option<Vec<Withdrawal>>,
}

impl ExecutionPayload {
    pub fn block_id(&self) -> BlockId {
        BlockId::new(self.block_hash, self.block_number)
    }

    /// Decodes an execution payload from the SSZ container layout of
    /// `version`. The whole buffer must be consumed; variable-length fields
    /// are referenced by u32 offsets packed into the fixed part in field
    /// order, and any overlap, gap, or out-of-range offset is rejected.
    pub fn from_ssz(data: &[u8], version: PayloadVersion) -> Result<Self, CodecError> {
        let scope = data.len();
        let fixed_part = version.fixed_part_size();
        if scope < fixed_part {
            return Err(CodecError::Truncated {
                need: fixed_part,
                have: scope,
            });
        }

        let mut reader = SszReader::new(data);
        let parent_hash = reader.read_hash()?;
        let fee_recipient = reader.read_address()?;
        let state_root = reader.read_hash()?;
        let receipts_root = reader.read_hash()?;
        let logs_bloom = Bloom::from_slice(reader.read_fixed_bytes(256)?);
        let prev_randao = reader.read_hash()?;
        let block_number = reader.read_u64()?;
        let gas_limit = reader.read_u64()?;
        let gas_used = reader.read_u64()?;
        let timestamp = reader.read_u64()?;

        let extra_data_offset = reader.read_u32()?;
        if extra_data_offset as usize != fixed_part {
            return Err(CodecError::UnexpectedOffset {
                field: "extra_data",
                found: extra_data_offset as u64,
                bound: fixed_part as u64,
            });
        }
        let base_fee_per_gas = reader.read_u256()?;
        let block_hash = reader.read_hash()?;

        let transactions_offset = reader.read_u32()?;
        if transactions_offset < extra_data_offset {
            return Err(CodecError::UnexpectedOffset {
                field: "transactions",
                found: transactions_offset as u64,
                bound: extra_data_offset as u64,
            });
        }
        if transactions_offset as usize > scope {
            return Err(CodecError::UnexpectedOffset {
                field: "transactions",
                found: transactions_offset as u64,
                bound: scope as u64,
            });
        }
        if transactions_offset - extra_data_offset > MAX_EXTRA_DATA_SIZE {
            return Err(CodecError::ExtraDataTooLarge(
                transactions_offset - extra_data_offset,
            ));
        }

        let withdrawals_offset = if version.has_withdrawals() {
            let withdrawals_offset = reader.read_u32()?;
            if withdrawals_offset < transactions_offset {
                return Err(CodecError::UnexpectedOffset {
                    field: "withdrawals",
                    found: withdrawals_offset as u64,
                    bound: transactions_offset as u64,
                });
            }
            if withdrawals_offset as usize > scope {
                return Err(CodecError::UnexpectedOffset {
                    field: "withdrawals",
                    found: withdrawals_offset as u64,
                    bound: scope as u64,
                });
            }
            withdrawals_offset as usize
        } else {
            scope
        };
        debug_assert_eq!(scope - reader.remaining(), fixed_part);

        let extra_data =
            Bytes::copy_from_slice(reader.read_fixed_bytes(transactions_offset as usize - fixed_part)?);
        let transactions = decode_transactions(
            reader.read_fixed_bytes(withdrawals_offset - transactions_offset as usize)?,
        )?;
        let withdrawals = if version.has_withdrawals() {
            Some(decode_withdrawals(
                reader.read_fixed_bytes(scope - withdrawals_offset)?,
            )?)
        } else {
            None
        };

        if !reader.is_complete() {
            return Err(CodecError::TrailingBytes(reader.remaining()));
        }

        Ok(Self {
            parent_hash,
            fee_recipient,
            state_root,
            receipts_root,
            logs_bloom,
            prev_randao,
            block_number,
            gas_limit,
            gas_used,
            timestamp,
            extra_data,
            base_fee_per_gas,
            block_hash,
            transactions,
            withdrawals,
        })
    }
}
