use thiserror::Error;

/// Decode failure of a non-conforming SSZ payload. None of these are
/// retryable; the input itself is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("not enough bytes: need {need}, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("unexpected {field} offset: {found}, bound {bound}")]
    UnexpectedOffset {
        field: &'static str,
        found: u64,
        bound: u64,
    },

    #[error("invalid transaction offset: {0}")]
    InvalidOffset(String),

    #[error("extra data too large: {0} bytes")]
    ExtraDataTooLarge(u32),

    #[error("too many transactions: {0}")]
    TooManyTransactions(usize),

    #[error("too many withdrawals: {0}")]
    TooManyWithdrawals(usize),

    #[error("invalid withdrawals length: {0} is not a multiple of the record size")]
    InvalidLength(usize),

    #[error("{0} trailing bytes after decode")]
    TrailingBytes(usize),
}
