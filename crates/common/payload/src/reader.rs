use alloy_primitives::{Address, B256, U256};

use crate::error::CodecError;

/// Sequential cursor over an immutable SSZ buffer. Every read is
/// bounds-checked; integers are little-endian. There is no framing or
/// alignment beyond what the caller reads.
#[derive(Debug)]
pub struct SszReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> SszReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Returns the next `len` bytes and advances the cursor.
    pub fn read_fixed_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let have = self.remaining();
        if have < len {
            return Err(CodecError::Truncated { need: len, have });
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    pub fn read_hash(&mut self) -> Result<B256, CodecError> {
        Ok(B256::from_slice(self.read_fixed_bytes(32)?))
    }

    pub fn read_address(&mut self) -> Result<Address, CodecError> {
        Ok(Address::from_slice(self.read_fixed_bytes(20)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.read_fixed_bytes(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.read_fixed_bytes(8)?);
        Ok(u64::from_le_bytes(buf))
    }

    /// 32 little-endian bytes interpreted as an unsigned 256-bit integer.
    pub fn read_u256(&mut self) -> Result<U256, CodecError> {
        Ok(U256::from_le_slice(self.read_fixed_bytes(32)?))
    }

    pub fn is_complete(&self) -> bool {
        self.offset == self.data.len()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;
    use crate::error::CodecError;

    #[test]
    fn reads_in_sequence() {
        let mut data = vec![0xab; 32];
        data.extend_from_slice(&7u64.to_le_bytes());
        data.extend_from_slice(&0xdead_beefu32.to_le_bytes());

        let mut reader = SszReader::new(&data);
        assert_eq!(reader.read_hash().unwrap().0, [0xab; 32]);
        assert_eq!(reader.read_u64().unwrap(), 7);
        assert!(!reader.is_complete());
        assert_eq!(reader.read_u32().unwrap(), 0xdead_beef);
        assert!(reader.is_complete());
    }

    #[test]
    fn u256_is_little_endian() {
        let mut data = [0u8; 32];
        data[0] = 0x01;
        data[1] = 0x02;

        let mut reader = SszReader::new(&data);
        assert_eq!(reader.read_u256().unwrap(), U256::from(0x0201));
    }

    #[test]
    fn short_read_is_truncated() {
        let mut reader = SszReader::new(&[0u8; 6]);
        assert_eq!(
            reader.read_u64(),
            Err(CodecError::Truncated { need: 8, have: 6 })
        );
        // A failed read does not advance the cursor.
        assert_eq!(reader.remaining(), 6);
        assert_eq!(reader.read_u32().unwrap(), 0);
        assert_eq!(reader.remaining(), 2);
    }
}
