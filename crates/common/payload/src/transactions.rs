use alloy_primitives::Bytes;

use crate::{error::CodecError, reader::SszReader};

/// MAX_TRANSACTIONS_PER_PAYLOAD in the consensus spec.
pub const MAX_TRANSACTIONS_PER_PAYLOAD: usize = 1 << 20;

const OFFSET_SIZE: u32 = 4;

/// Decodes an SSZ list of opaque transaction byte strings. The buffer opens
/// with a table of u32 offsets; the first offset points past the end of the
/// table and thereby encodes the element count. Transactions are
/// typed-envelope RLP and are not parsed here.
///
/// Every declared offset must cover actual bytes; a buffer whose offsets and
/// length disagree is rejected rather than padded out.
pub fn decode_transactions(data: &[u8]) -> Result<Vec<Bytes>, CodecError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let scope = data.len();
    let mut reader = SszReader::new(data);

    let first_offset = reader.read_u32()?;
    if first_offset % OFFSET_SIZE != 0 {
        return Err(CodecError::InvalidOffset(format!(
            "first offset {first_offset} is not a multiple of the offset size"
        )));
    }
    if first_offset as usize > scope {
        return Err(CodecError::InvalidOffset(format!(
            "first offset {first_offset} is out of scope {scope}"
        )));
    }
    let count = (first_offset / OFFSET_SIZE) as usize;
    if count > MAX_TRANSACTIONS_PER_PAYLOAD {
        return Err(CodecError::TooManyTransactions(count));
    }

    // The end of element i is the offset of element i+1; the last element
    // runs to the end of the buffer.
    let mut ends = Vec::with_capacity(count);
    let mut current = first_offset;
    for index in 0..count {
        let next = if index + 1 < count {
            reader.read_u32()?
        } else {
            scope as u32
        };
        if next < current || next as usize > scope {
            return Err(CodecError::InvalidOffset(format!(
                "transaction {index} has bad next offset {next}, current is {current}, scope is {scope}"
            )));
        }
        ends.push(next);
        current = next;
    }

    let mut transactions = Vec::with_capacity(count);
    let mut start = first_offset;
    for end in ends {
        let transaction = reader.read_fixed_bytes((end - start) as usize)?;
        transactions.push(Bytes::copy_from_slice(transaction));
        start = end;
    }

    if !reader.is_complete() {
        return Err(CodecError::TrailingBytes(reader.remaining()));
    }
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(transactions: &[&[u8]]) -> Vec<u8> {
        let mut data = Vec::new();
        let mut offset = OFFSET_SIZE * transactions.len() as u32;
        for transaction in transactions {
            data.extend_from_slice(&offset.to_le_bytes());
            offset += transaction.len() as u32;
        }
        for transaction in transactions {
            data.extend_from_slice(transaction);
        }
        data
    }

    #[test]
    fn empty_buffer_is_empty_list() {
        assert_eq!(decode_transactions(&[]).unwrap(), Vec::<Bytes>::new());
    }

    #[test]
    fn single_empty_transaction() {
        // One offset pointing at the end of the table.
        let data = [0x04, 0x00, 0x00, 0x00];
        assert_eq!(decode_transactions(&data).unwrap(), vec![Bytes::new()]);
    }

    #[test]
    fn three_transactions_round_trip() {
        let data = encode(&[&[0xaa], &[0xbb, 0xcc], &[0xdd]]);
        assert_eq!(data[..4], 12u32.to_le_bytes());

        let transactions = decode_transactions(&data).unwrap();
        assert_eq!(
            transactions,
            vec![
                Bytes::from_static(&[0xaa]),
                Bytes::from_static(&[0xbb, 0xcc]),
                Bytes::from_static(&[0xdd]),
            ]
        );
    }

    #[test]
    fn short_offset_table_is_truncated() {
        assert_eq!(
            decode_transactions(&[0x04, 0x00]),
            Err(CodecError::Truncated { need: 4, have: 2 })
        );
    }

    #[test]
    fn rejects_misaligned_first_offset() {
        let mut data = encode(&[&[0xaa]]);
        data[0] = 0x05;
        assert!(matches!(
            decode_transactions(&data),
            Err(CodecError::InvalidOffset(_))
        ));
    }

    #[test]
    fn rejects_first_offset_out_of_scope() {
        let data = [0x08, 0x00, 0x00, 0x00];
        assert!(matches!(
            decode_transactions(&data),
            Err(CodecError::InvalidOffset(_))
        ));
    }

    #[test]
    fn rejects_decreasing_offsets() {
        // Two elements, second offset behind the first.
        let mut data = encode(&[&[0xaa], &[0xbb]]);
        data[4..8].copy_from_slice(&7u32.to_le_bytes());
        assert!(matches!(
            decode_transactions(&data),
            Err(CodecError::InvalidOffset(_))
        ));
    }

    #[test]
    fn rejects_offset_beyond_scope() {
        let mut data = encode(&[&[0xaa], &[0xbb]]);
        data[4..8].copy_from_slice(&100u32.to_le_bytes());
        assert!(matches!(
            decode_transactions(&data),
            Err(CodecError::InvalidOffset(_))
        ));
    }

    #[test]
    fn rejects_count_beyond_protocol_maximum() {
        let first_offset = OFFSET_SIZE * (MAX_TRANSACTIONS_PER_PAYLOAD as u32 + 1);
        let mut data = vec![0u8; first_offset as usize];
        data[..4].copy_from_slice(&first_offset.to_le_bytes());
        assert_eq!(
            decode_transactions(&data),
            Err(CodecError::TooManyTransactions(
                MAX_TRANSACTIONS_PER_PAYLOAD + 1
            ))
        );
    }
}
