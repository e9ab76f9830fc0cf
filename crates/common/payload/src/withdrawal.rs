use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{error::CodecError, reader::SszReader};

/// Wire size of one withdrawal record: index, validator index, address,
/// amount, concatenated in that order.
pub const WITHDRAWAL_SIZE: usize = 8 + 8 + 20 + 8;

/// MAX_WITHDRAWALS_PER_PAYLOAD in the consensus spec.
pub const MAX_WITHDRAWALS_PER_PAYLOAD: usize = 1 << 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub validator_index: u64,
    pub address: Address,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
}

/// Decodes a fixed-stride withdrawal list, preserving input order. The
/// buffer length must be a multiple of [`WITHDRAWAL_SIZE`].
pub fn decode_withdrawals(data: &[u8]) -> Result<Vec<Withdrawal>, CodecError> {
    if data.len() % WITHDRAWAL_SIZE != 0 {
        return Err(CodecError::InvalidLength(data.len()));
    }
    let count = data.len() / WITHDRAWAL_SIZE;
    if count > MAX_WITHDRAWALS_PER_PAYLOAD {
        return Err(CodecError::TooManyWithdrawals(count));
    }

    let mut reader = SszReader::new(data);
    let mut withdrawals = Vec::with_capacity(count);
    for _ in 0..count {
        withdrawals.push(Withdrawal {
            index: reader.read_u64()?,
            validator_index: reader.read_u64()?,
            address: reader.read_address()?,
            amount: reader.read_u64()?,
        });
    }
    debug_assert!(reader.is_complete());
    Ok(withdrawals)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    fn encode(withdrawal: &Withdrawal) -> Vec<u8> {
        let mut data = Vec::with_capacity(WITHDRAWAL_SIZE);
        data.extend_from_slice(&withdrawal.index.to_le_bytes());
        data.extend_from_slice(&withdrawal.validator_index.to_le_bytes());
        data.extend_from_slice(withdrawal.address.as_slice());
        data.extend_from_slice(&withdrawal.amount.to_le_bytes());
        data
    }

    #[test]
    fn empty_buffer_is_empty_list() {
        assert_eq!(decode_withdrawals(&[]).unwrap(), vec![]);
    }

    #[test]
    fn decodes_two_records_in_order() {
        let first = Withdrawal {
            index: 1,
            validator_index: 2,
            address: address!("0x000000000000000000000000000000000000000a"),
            amount: 1000,
        };
        let second = Withdrawal {
            index: 2,
            validator_index: 3,
            address: address!("0x000000000000000000000000000000000000000b"),
            amount: 2000,
        };

        let mut data = encode(&first);
        data.extend_from_slice(&encode(&second));
        assert_eq!(data.len(), 2 * WITHDRAWAL_SIZE);

        assert_eq!(decode_withdrawals(&data).unwrap(), vec![first, second]);
    }

    #[test]
    fn rejects_length_not_a_multiple_of_stride() {
        let data = vec![0u8; WITHDRAWAL_SIZE + 1];
        assert_eq!(
            decode_withdrawals(&data),
            Err(CodecError::InvalidLength(WITHDRAWAL_SIZE + 1))
        );
    }

    #[test]
    fn rejects_more_than_protocol_maximum() {
        let data = vec![0u8; (MAX_WITHDRAWALS_PER_PAYLOAD + 1) * WITHDRAWAL_SIZE];
        assert_eq!(
            decode_withdrawals(&data),
            Err(CodecError::TooManyWithdrawals(MAX_WITHDRAWALS_PER_PAYLOAD + 1))
        );
    }

    #[test]
    fn maximum_count_is_accepted() {
        let data = vec![0u8; MAX_WITHDRAWALS_PER_PAYLOAD * WITHDRAWAL_SIZE];
        assert_eq!(
            decode_withdrawals(&data).unwrap().len(),
            MAX_WITHDRAWALS_PER_PAYLOAD
        );
    }
}
